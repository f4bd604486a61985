//! C ABI for the gateway.
//!
//! Every function returns `0` on success or a negative [`ErrorCode`]. Sizes
//! are `size_t`. Lengths are range-checked before any slice is formed from a
//! raw pointer, and out-parameters are written only on success.

use std::slice;

use crate::config::Codec;
use crate::error::{Error, ErrorCode, Result, ensure_len};

/// Borrow `len` bytes at `ptr`. A null pointer is accepted only for `len == 0`.
///
/// # Safety
/// When non-null, `ptr` must be valid for reads of `len` bytes for `'a`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8]> {
    if ptr.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(Error::InvalidArgument("null input with non-zero length"));
    }
    // SAFETY: non-null and valid for `len` reads per the caller's contract;
    // `len` has already been checked against the codec limit.
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Mutably borrow `len` bytes at `ptr`, which must be non-null.
///
/// # Safety
/// `ptr` must be valid for writes of `len` bytes for `'a` and not aliased.
unsafe fn output_slice<'a>(ptr: *mut u8, len: usize) -> Result<&'a mut [u8]> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument("null output buffer"));
    }
    // SAFETY: see the function contract.
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

fn finish(result: Result<()>) -> i32 {
    ErrorCode::from(result) as i32
}

/// Store the LZ4 worst-case bound for `src_len` in `*out_bound`.
///
/// # Safety
/// `out_bound` must be null or valid for a `usize` write.
#[cfg(feature = "codec-lz4")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_lz4_compress_bound(src_len: usize, out_bound: *mut usize) -> i32 {
    finish((|| -> Result<()> {
        if out_bound.is_null() {
            return Err(Error::InvalidArgument("null bound pointer"));
        }
        let bound = crate::compression_lz4::compress_bound(src_len)?;
        // SAFETY: checked non-null above.
        unsafe { out_bound.write(bound) };
        Ok(())
    })())
}

/// Compress `src` into `dst` as one LZ4 block and store the size in `*out_len`.
///
/// `dst_cap` must be at least the bound reported by
/// [`bufcodec_lz4_compress_bound`].
///
/// # Safety
/// `src` must be readable for `src_len` bytes (or null with `src_len == 0`),
/// `dst` writable for `dst_cap` bytes, `out_len` valid for a `usize` write.
/// The buffers must not overlap.
#[cfg(feature = "codec-lz4")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_lz4_compress(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    dst_cap: usize,
    out_len: *mut usize,
) -> i32 {
    finish((|| -> Result<()> {
        if out_len.is_null() {
            return Err(Error::InvalidArgument("null length pointer"));
        }
        ensure_len(Codec::Lz4, src_len)?;
        ensure_len(Codec::Lz4, dst_cap)?;
        // SAFETY: lengths are in range; validity is the caller's contract.
        let (input, output) = unsafe { (input_slice(src, src_len)?, output_slice(dst, dst_cap)?) };
        let written = crate::compression_lz4::compress_into(input, output)?;
        // SAFETY: checked non-null above.
        unsafe { out_len.write(written) };
        Ok(())
    })())
}

/// Decompress an LZ4 block from `src` into exactly `dst_len` bytes at `dst`.
///
/// # Safety
/// `src` must be readable for `src_len` bytes (or null with `src_len == 0`),
/// `dst` writable for `dst_len` bytes. The buffers must not overlap.
#[cfg(feature = "codec-lz4")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_lz4_decompress(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    dst_len: usize,
) -> i32 {
    finish((|| -> Result<()> {
        ensure_len(Codec::Lz4, src_len)?;
        ensure_len(Codec::Lz4, dst_len)?;
        // SAFETY: lengths are in range; validity is the caller's contract.
        let (input, output) = unsafe { (input_slice(src, src_len)?, output_slice(dst, dst_len)?) };
        crate::compression_lz4::decompress_into(input, output)
    })())
}

/// Store the advisory DEFLATE worst-case bound for `src_len` in `*out_bound`.
///
/// # Safety
/// `out_bound` must be null or valid for a `usize` write.
#[cfg(feature = "codec-deflate")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_deflate_compress_bound(
    src_len: usize,
    out_bound: *mut usize,
) -> i32 {
    finish((|| -> Result<()> {
        if out_bound.is_null() {
            return Err(Error::InvalidArgument("null bound pointer"));
        }
        let bound = crate::compression_deflate::compress_bound(src_len)?;
        // SAFETY: checked non-null above.
        unsafe { out_bound.write(bound) };
        Ok(())
    })())
}

/// Read the capacity from `*inout`, run `op` on the buffers, and overwrite
/// `*inout` with the written length on success.
///
/// # Safety
/// Same contract as the public DEFLATE functions.
#[cfg(feature = "codec-deflate")]
unsafe fn deflate_inout(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    inout_dst_len: *mut usize,
    op: fn(&[u8], &mut [u8]) -> Result<usize>,
) -> Result<()> {
    if inout_dst_len.is_null() {
        return Err(Error::InvalidArgument("null length pointer"));
    }
    // SAFETY: checked non-null above.
    let capacity = unsafe { inout_dst_len.read() };
    ensure_len(Codec::Deflate, src_len)?;
    ensure_len(Codec::Deflate, capacity)?;
    // SAFETY: lengths are in range; validity is the caller's contract.
    let (input, output) = unsafe { (input_slice(src, src_len)?, output_slice(dst, capacity)?) };
    let written = op(input, output)?;
    // SAFETY: checked non-null above.
    unsafe { inout_dst_len.write(written) };
    Ok(())
}

/// Compress `src` into a zlib stream at `dst`.
///
/// `*inout_dst_len` is read as the capacity of `dst` and, on success only,
/// replaced with the compressed length. Callers must re-supply the capacity
/// on every call.
///
/// # Safety
/// `src` must be readable for `src_len` bytes (or null with `src_len == 0`),
/// `inout_dst_len` valid for reads and writes, `dst` writable for
/// `*inout_dst_len` bytes. The buffers must not overlap.
#[cfg(feature = "codec-deflate")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_deflate_compress(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    inout_dst_len: *mut usize,
) -> i32 {
    // SAFETY: forwarded caller contract.
    finish(unsafe {
        deflate_inout(
            src,
            src_len,
            dst,
            inout_dst_len,
            crate::compression_deflate::compress_into,
        )
    })
}

/// Decompress a zlib stream from `src` into `dst`.
///
/// `*inout_dst_len` is read as the capacity of `dst` and, on success only,
/// replaced with the decompressed length. A capacity that is too small
/// reports the same code as a corrupt stream.
///
/// # Safety
/// Same contract as [`bufcodec_deflate_compress`].
#[cfg(feature = "codec-deflate")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bufcodec_deflate_decompress(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    inout_dst_len: *mut usize,
) -> i32 {
    // SAFETY: forwarded caller contract.
    finish(unsafe {
        deflate_inout(
            src,
            src_len,
            dst,
            inout_dst_len,
            crate::compression_deflate::decompress_into,
        )
    })
}
