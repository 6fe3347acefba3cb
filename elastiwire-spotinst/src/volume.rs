//! EBS volume policy shared by every block device builder

/// Volume type the API rejects an IOPS parameter for
pub const GP2: &str = "gp2";

/// IOPS value to forward for a volume, if any
///
/// The IOPS parameter is not supported for gp2 volumes: forwarding it makes
/// the request fail, so it is dropped whenever the volume type is gp2.
pub fn volume_iops<T>(iops: Option<T>, volume_type: Option<&str>) -> Option<T> {
    if volume_type == Some(GP2) {
        return None;
    }
    iops
}
