pub(crate) mod pdns_admin;
