/// Copy counts of one title. `available` never exceeds `total`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BookCopies {
    total: u32,
    available: u32,
}

impl BookCopies {
    /// Negative counts are clamped to zero.
    pub fn new(copies: impl Into<i32>) -> Self {
        let total = u32::try_from(copies.into()).unwrap_or(0);
        Self {
            total,
            available: total,
        }
    }

    /// Rebuilds counts read back from storage, rejecting `available > total`.
    pub fn restore(total: u32, available: u32) -> Option<Self> {
        (available <= total).then_some(Self { total, available })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn on_loan(&self) -> u32 {
        self.total - self.available
    }

    pub(crate) fn take(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        self.available -= 1;
        true
    }

    pub(crate) fn put_back(&mut self) -> bool {
        if self.available >= self.total {
            return false;
        }
        self.available += 1;
        true
    }

    pub(crate) fn extend(&mut self, count: i32) {
        let Ok(count) = u32::try_from(count) else {
            return;
        };
        self.total = self.total.saturating_add(count);
        self.available = self.available.saturating_add(count);
    }
}
