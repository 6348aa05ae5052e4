use aliri_braid::braid;

/// Date in ISO-8601 format.
#[braid(serde)]
pub struct DateString;

/// SMPTE timecode, e.g. `10:00:00:00`
#[braid(serde)]
pub struct Timecode;

/// Name of an S3 bucket.
#[braid(serde)]
pub struct Bucket;

/// Key of an object in an S3 bucket.
#[braid(serde)]
pub struct ObjectKey;
