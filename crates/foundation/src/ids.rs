/// Opaque marker identity.
///
/// Ids are allocated by [`MarkerIdAllocator`] and are unique for the process
/// lifetime; they are never reused because no delete path exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct MarkerIdAllocator {
    next: u64,
}

impl MarkerIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> MarkerId {
        let id = MarkerId(self.next);
        self.next += 1;
        id
    }
}
