//! The six enumerations the Game DAG and task queue are built from (spec §3).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Victory {
    Uncertain,
    Adv,
    Alg,
    Irrelevant,
}

impl Victory {
    pub fn is_decided(self) -> bool {
        !matches!(self, Victory::Uncertain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexState {
    Fresh,
    Finished,
    Expandable,
    Expanding,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    NonLeaf,
    Heuristical,
    TrueLeaf,
    Boundary,
    Assumption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    LargeItem,
    FiveNine,
    GoodSituation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinimaxMode {
    Generating,
    Exploring,
    Updating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Available,
    Batched,
    Pruned,
    AlgWin,
    AdvWin,
    Irrelevant,
}

impl TaskStatus {
    pub fn to_u8(self) -> u8 {
        match self {
            TaskStatus::Available => 0,
            TaskStatus::Batched => 1,
            TaskStatus::Pruned => 2,
            TaskStatus::AlgWin => 3,
            TaskStatus::AdvWin => 4,
            TaskStatus::Irrelevant => 5,
        }
    }

    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => TaskStatus::Available,
            1 => TaskStatus::Batched,
            2 => TaskStatus::Pruned,
            3 => TaskStatus::AlgWin,
            4 => TaskStatus::AdvWin,
            5 => TaskStatus::Irrelevant,
            _ => unreachable!("invalid TaskStatus encoding"),
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            TaskStatus::AlgWin | TaskStatus::AdvWin | TaskStatus::Pruned | TaskStatus::Irrelevant
        )
    }
}
