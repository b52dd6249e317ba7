//! The ownership and permission policy a secured file must satisfy.

use serde::Serialize;

/// Owner read/write/execute bits.
const OWNER_MASK: u32 = 0o700;
/// Group read/write/execute bits.
const GROUP_MASK: u32 = 0o070;
/// Other read/write/execute bits.
const OTHER_MASK: u32 = 0o007;

/// Mode, owner and group a file must carry to count as secure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityPolicy {
    /// Permission bits (only the lower nine rwx bits are meaningful).
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
}

impl SecurityPolicy {
    /// Owner-read and group-read only, owned by root:root.
    pub const ROOT_READ_ONLY: SecurityPolicy = SecurityPolicy {
        mode: 0o440,
        uid: 0,
        gid: 0,
    };

    pub const fn new(mode: u32, uid: u32, gid: u32) -> Self {
        Self { mode, uid, gid }
    }

    /// The policy mode in the decimal `permission_bits` encoding.
    pub fn bits(&self) -> u32 {
        permission_bits(self.mode)
    }

    /// Whether a file with the given metadata satisfies this policy.
    ///
    /// The bits and the ownership are both required; either mismatch fails.
    pub fn is_satisfied_by(&self, bits: u32, uid: u32, gid: u32) -> bool {
        bits == self.bits() && uid == self.uid && gid == self.gid
    }
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self::ROOT_READ_ONLY
    }
}

/// Project raw mode bits into the "human readable" decimal form.
///
/// Each digit is the octal value of one class, so `0o640` becomes `640`.
/// The result is a decimal number, not an octal one.
pub fn permission_bits(mode: u32) -> u32 {
    let user = (mode & OWNER_MASK) >> 6;
    let group = (mode & GROUP_MASK) >> 3;
    let others = mode & OTHER_MASK;
    user * 100 + group * 10 + others
}

/// Parse an octal mode string such as `"440"` or `"0o440"`.
pub fn parse_mode(input: &str) -> Option<u32> {
    let digits = input
        .strip_prefix("0o")
        .or_else(|| input.strip_prefix('0').filter(|rest| !rest.is_empty()))
        .unwrap_or(input);
    if digits.is_empty() || digits.len() > 3 {
        return None;
    }
    u32::from_str_radix(digits, 8).ok()
}
