//! Last-request-wins bookkeeping for overlapping fetches.
//!
//! Each request takes a token; a response may be applied only while its
//! token is still the latest one issued on that channel.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Makes every outstanding token stale without starting a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_token_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn invalidate_stales_outstanding_tokens() {
        let mut seq = RequestSequence::new();
        let token = seq.issue();
        seq.invalidate();

        assert!(!seq.is_current(token));
        let next = seq.issue();
        assert!(seq.is_current(next));
    }
}
