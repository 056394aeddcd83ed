//! Read tickets for the photo preview. Each file selection takes a fresh
//! ticket from a monotonic sequence; a completion only applies while its
//! ticket is still the latest, so a slow read can never overwrite the
//! preview of a later selection.

#[derive(Debug, Default)]
pub struct ReadTickets {
    latest: u64,
}

impl ReadTickets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new read, invalidating every earlier ticket.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[inline]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest && ticket != 0
    }
}
