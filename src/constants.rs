/// Default base URL of the identity toolkit service
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";
/// Default base URL of the Firestore document service
pub const DEFAULT_DOCUMENTS_URL: &str = "https://firestore.googleapis.com";
/// Default number of documents requested when `--limit` is not given
pub const DEFAULT_LIMIT: i64 = 10;
/// Default number of seconds between two polls in monitor mode
pub const DEFAULT_MONITOR_INTERVAL_SECS: u64 = 5;
/// Field used to order documents when `--recent` is requested
pub const CREATED_AT_FIELD: &str = "created_at";
/// Extension appended to the random file name of saved results
pub const OUTPUT_FILE_EXTENSION: &str = "json";
/// Number of hex characters in a generated output file name
pub const OUTPUT_FILE_NAME_LEN: usize = 16;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("firestore-peek/", env!("CARGO_PKG_VERSION"));
