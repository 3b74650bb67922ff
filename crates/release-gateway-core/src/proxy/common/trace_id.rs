use rand::Rng;
use std::fmt;

/// Correlates the log lines of one download: resolve, stream, finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(u32);

impl TraceId {
    pub fn new() -> Self {
        Self(rand::thread_rng().gen())
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dl-{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fixed_width() {
        assert_eq!(TraceId(0x2a).to_string(), "dl-0000002a");
        assert_eq!(TraceId(u32::MAX).to_string(), "dl-ffffffff");
    }

    #[test]
    fn test_new_ids_are_prefixed_hex() {
        let id = TraceId::new().to_string();
        assert_eq!(id.len(), 11);
        assert!(id.starts_with("dl-"));
        assert!(id[3..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
