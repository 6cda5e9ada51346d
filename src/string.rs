//! Conversions between `Char` lists and zero-terminated byte strings, plus
//! bulk access to the payloads of a `Custom` list.

use crate::config::Config;
use crate::error::{ListError, Result};
use crate::kind::{ElementKind, Payload, Value};
use crate::list::List;

/// Scan until the first terminator instead of a fixed count.
pub const UNTIL_TERMINATOR: isize = -1;

fn check_kind(list: &List, kind: ElementKind) -> Result<()> {
    if list.kind() != kind {
        return Err(ListError::KindMismatch {
            expected: kind,
            found: list.kind(),
        });
    }
    if list.is_empty() {
        return Err(ListError::Empty);
    }
    Ok(())
}

/// Copies a `Char` list into a new buffer of `len + 1` bytes ending in `0`.
pub fn list_to_string(list: &List) -> Result<Vec<u8>> {
    check_kind(list, ElementKind::Char)?;

    let mut s = Vec::new();
    s.try_reserve_exact(list.len() + 1)
        .map_err(|_| ListError::OutOfMemory)?;
    for value in list.iter() {
        if let Value::Char(c) = value {
            s.push(*c);
        }
    }
    s.push(0);
    Ok(s)
}

/// `string_to_list_with` using the default `Config`.
pub fn string_to_list(string: &[u8], size: isize) -> Result<List> {
    string_to_list_with(string, size, &Config::default())
}

/// Builds a `Char` list from the bytes of `string`.
///
/// With `size == UNTIL_TERMINATOR` every byte before the first `0` is copied;
/// the string may be at most `config.max_scan` bytes long and its terminator
/// has to lie within the slice. Any other positive `size` copies at most that
/// many bytes, stopping early at a terminator or at the end of the slice.
pub fn string_to_list_with(string: &[u8], size: isize, config: &Config) -> Result<List> {
    if size < UNTIL_TERMINATOR {
        return Err(ListError::InvalidSize(size));
    }
    if size == 0 || string.first().map_or(true, |&c| c == 0) {
        return Err(ListError::EmptyString);
    }

    let bytes = if size == UNTIL_TERMINATOR {
        let limit = config.max_scan.saturating_add(1);
        let window = &string[..string.len().min(limit)];
        match window.iter().position(|&c| c == 0) {
            Some(end) => &window[..end],
            None => {
                warn!("no terminator within the first {} bytes", window.len());
                return Err(ListError::Unterminated {
                    scanned: window.len(),
                });
            }
        }
    } else {
        let window = &string[..string.len().min(size as usize)];
        match window.iter().position(|&c| c == 0) {
            Some(end) => &window[..end],
            None => window,
        }
    };

    let sized = Config::new().with_node_capacity(bytes.len());
    let mut list = List::with_config(ElementKind::Char, &sized)?;
    for &c in bytes {
        list.add(-1, c)?;
    }
    Ok(list)
}

/// Copies `string` the same way `string_to_list` bounds it, through an
/// intermediate list that is always released.
pub fn duplicate_string(string: &[u8], size: isize) -> Result<Vec<u8>> {
    let list = string_to_list(string, size)?;
    let dup = list_to_string(&list);
    list.destroy();
    dup
}

/// Every payload of a `Custom` list, head to tail.
pub fn custom_payload_array(list: &List) -> Result<Vec<Payload>> {
    check_kind(list, ElementKind::Custom)?;

    let mut customs = Vec::new();
    customs
        .try_reserve_exact(list.len())
        .map_err(|_| ListError::OutOfMemory)?;
    customs.extend(list.iter().filter_map(|v| v.as_custom().cloned()));
    Ok(customs)
}
