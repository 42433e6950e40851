//! Safe-ish conversions between rust and sql types.

use crate::store::StoreError;

pub fn i32_to_u32(i: i32) -> Result<u32, StoreError> {
    if i < 0 {
        Err(StoreError::Conversion(
            "i32 value is negative and cannot be converted to u32".to_string(),
        ))
    } else {
        Ok(i as u32)
    }
}
pub fn u32_to_i32(i: u32) -> Result<i32, StoreError> {
    if i > i32::MAX as u32 {
        Err(StoreError::Conversion(
            "u32 value exceeds i32::MAX and cannot be converted to i32".to_string(),
        ))
    } else {
        Ok(i as i32)
    }
}

pub fn i64_to_u64(i: i64) -> Result<u64, StoreError> {
    if i < 0 {
        Err(StoreError::Conversion(
            "i64 value is negative and cannot be converted to u64".to_string(),
        ))
    } else {
        Ok(i as u64)
    }
}

/// Convert a list of ids, skipping any that could never exist in an i32 column.
pub fn u32s_to_i32s(ids: &[u32]) -> Vec<i32> {
    ids.iter().filter_map(|id| u32_to_i32(*id).ok()).collect()
}
