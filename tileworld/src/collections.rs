/// Monotonic id source. Values are handed out starting from zero and never
/// come back, even when the entity that received one is gone.
#[derive(Default, Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        let value = self.value;
        self.value += 1;
        constructor(value)
    }
}
