mod helpers;
mod test_whitelist;
