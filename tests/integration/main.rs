#[path = "../common/mod.rs"]
mod common;

mod test_actives;
mod test_checkout;
mod test_exists;
mod test_freq;
mod test_last;
mod test_recent;
mod test_search;
