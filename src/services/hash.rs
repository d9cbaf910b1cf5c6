const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the UTF-16 code units of `input`.
///
/// Keys built by the mini-app client are hashed one code unit at a time, so
/// non-ASCII input must be walked as UTF-16 rather than as UTF-8 bytes to
/// produce the same fingerprint on both sides.
pub fn fnv1a_hash(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
