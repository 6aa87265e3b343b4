/// Returns the peak resident set size of the current process in megabytes.
///
/// `ru_maxrss` is reported in kilobytes on Linux and in bytes on macOS.
/// Returns 0.0 if `getrusage` fails.
///
/// # Example
/// ```rust, ignore
/// use gtf2gff3::max_mem_usage_mb;
///
/// println!("Max memory usage: {:.2} MB", max_mem_usage_mb());
/// ```
pub fn max_mem_usage_mb() -> f64 {
    let mut rusage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage only writes into the provided, properly sized struct.
    let status = unsafe { libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr()) };
    if status != 0 {
        return 0.0;
    }

    // SAFETY: zero-initialized and filled in by a successful getrusage call.
    let maxrss = unsafe { rusage.assume_init() }.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}
