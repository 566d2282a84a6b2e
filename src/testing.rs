//! Helpers shared by the unit and integration tests

pub fn init_test() {
    drop(env_logger::try_init());
}
