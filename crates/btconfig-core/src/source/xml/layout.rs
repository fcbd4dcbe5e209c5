/// Location of the Bluedroid pairing database on Android devices.
pub const DEFAULT_CONFIG_PATH: &str = "/data/misc/bluedroid/bt_config.xml";

pub const READ_BUFFER_SIZE: usize = 16 * 1024;
