use crate::consts::consts::{PersonId, START_AT_INDEX};

/// Hands out person ids. Ids only ever move forward, removing a person does not give its id back.
#[derive(Debug, Clone)]
pub struct PersonIdSequence {
    next: PersonId,
}

impl PersonIdSequence {
    pub fn new() -> Self {
        Self::starting_at(START_AT_INDEX)
    }

    pub fn starting_at(next: PersonId) -> Self {
        Self { next }
    }

    /// Returns the current value and advances the counter
    pub fn next_id(&mut self) -> PersonId {
        let id = self.next;
        self.next = self.next.increment();
        id
    }

    pub fn peek(&self) -> PersonId {
        self.next
    }
}

impl Default for PersonIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let mut sequence = PersonIdSequence::new();

        assert_eq!(sequence.peek(), PersonId(1));
        assert_eq!(sequence.next_id(), PersonId(1));
        assert_eq!(sequence.peek(), PersonId(2));
    }

    #[test]
    fn never_returns_the_same_id_twice() {
        let mut sequence = PersonIdSequence::starting_at(PersonId(5));

        let ids: Vec<PersonId> = (0..4).map(|_| sequence.next_id()).collect();

        assert_eq!(ids, vec![PersonId(5), PersonId(6), PersonId(7), PersonId(8)]);
    }

    #[test]
    fn peek_does_not_advance() {
        let sequence = PersonIdSequence::new();

        assert_eq!(sequence.peek(), sequence.peek());
    }
}
