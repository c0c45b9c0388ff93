pub fn option_is_empty<T>(value: &Option<T>) -> bool {
    value.is_none()
}
