use bitflags::bitflags;

/// The moment of a mutation a delivery belongs to.
///
/// `Old` carries the pre-mutation value, `New` the post-mutation value.
/// `Initial` is delivered once at registration time with whatever value the
/// container holds at that point, independent of any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Old,
    New,
}

bitflags! {
    /// The set of phases a listener subscribes to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Phases: u8 {
        const INITIAL = 1 << 0;
        const OLD = 1 << 1;
        const NEW = 1 << 2;
    }
}

impl Phases {
    pub fn contains_phase(&self, phase: Phase) -> bool {
        self.contains(Phases::from(phase))
    }
}

impl From<Phase> for Phases {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Initial => Phases::INITIAL,
            Phase::Old => Phases::OLD,
            Phase::New => Phases::NEW,
        }
    }
}
