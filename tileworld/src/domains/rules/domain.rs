use std::collections::HashMap;

use log::info;

use crate::collections::Sequence;

/// Index of a tile in the concatenated catalog, fixed tiles first.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bincode::Encode, bincode::Decode,
)]
pub struct Kind(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct TileKey(pub usize);

#[derive(Debug, Clone)]
pub struct Tile {
    pub key: TileKey,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum RuleType {
    Resting,
    Moving,
    Pushing,
    Colliding,
}

impl RuleType {
    /// Every rule type except resting is meaningless without a direction.
    pub fn is_directional(&self) -> bool {
        !matches!(self, RuleType::Resting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum AttrType {
    #[default]
    Ok,
    Include,
    Exclude,
    OneOf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Command {
    pub inst: Option<usize>,
    pub arg: Option<usize>,
}

impl Command {
    pub const SLOTS: usize = 4;
}

#[derive(Debug, Clone)]
pub struct WhenDo {
    pub col: usize,
    pub row: usize,
    pub attrs: Vec<AttrType>,
    pub commands: Vec<Command>,
}

impl WhenDo {
    pub fn new(col: usize, row: usize, kinds: usize) -> Self {
        Self {
            col,
            row,
            attrs: vec![AttrType::Ok; kinds],
            commands: vec![],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub kinds: Vec<Kind>,
    pub rule_type: RuleType,
    pub direction: Option<MoveDirection>,
    pub when_do: Vec<WhenDo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bincode::Encode, bincode::Decode)]
pub struct RuleId(pub usize);

#[derive(Debug, Clone)]
pub struct IdRule {
    pub id: RuleId,
    pub rule: Rule,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Rules {
    RuleCreated {
        id: RuleId,
        kinds: Vec<Kind>,
        rule_type: RuleType,
        direction: Option<MoveDirection>,
    },
    RuleRemoved {
        id: RuleId,
    },
    KindsChanged {
        rule: RuleId,
        kinds: Vec<Kind>,
    },
    TypeChanged {
        rule: RuleId,
        rule_type: RuleType,
    },
    DirectionChanged {
        rule: RuleId,
        direction: Option<MoveDirection>,
    },
    WhenDoCreated {
        rule: RuleId,
        index: usize,
        col: usize,
        row: usize,
    },
    AttributeChanged {
        rule: RuleId,
        when_do: usize,
        kind: Kind,
        attr: AttrType,
    },
    CommandChanged {
        rule: RuleId,
        when_do: usize,
        slot: usize,
        command: Command,
    },
    CommandRemoved {
        rule: RuleId,
        when_do: usize,
        slot: usize,
    },
}

#[derive(Debug, Clone, bincode::Encode, bincode::Decode)]
pub enum RulesError {
    KindNotFound {
        kind: Kind,
    },
    TileNotFound {
        tile: TileKey,
    },
    TileNameNotFound {
        name: String,
    },
    RuleNotFound {
        id: RuleId,
    },
    WhenDoNotFound {
        rule: RuleId,
        index: usize,
    },
    AttributeNotFound {
        rule: RuleId,
        when_do: usize,
        kind: Kind,
    },
    CommandCapacityExceeded {
        rule: RuleId,
        when_do: usize,
        slot: usize,
    },
}

pub struct Project {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) fixed: usize,
    pub(crate) rules: Vec<IdRule>,
    pub(crate) rules_index: HashMap<RuleId, usize>,
    pub(crate) rules_id: Sequence,
    pub(crate) player: Option<Kind>,
    pub(crate) world: Option<TileKey>,
    pub(crate) default_tile: Kind,
}

impl Project {
    pub fn new<F, M>(fixed: F, movable: M) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let mut tiles_id = Sequence::default();
        let mut tiles: Vec<Tile> = fixed
            .into_iter()
            .map(|name| Tile {
                key: tiles_id.one(TileKey),
                name: name.into(),
            })
            .collect();
        let fixed = tiles.len();
        tiles.extend(movable.into_iter().map(|name| Tile {
            key: tiles_id.one(TileKey),
            name: name.into(),
        }));
        info!(
            "Project created with {} fixed and {} movable tiles",
            fixed,
            tiles.len() - fixed
        );
        Self {
            tiles,
            fixed,
            rules: vec![],
            rules_index: HashMap::new(),
            rules_id: Sequence::default(),
            player: None,
            world: None,
            default_tile: Kind(0),
        }
    }

    /// Total kind count, which is also the length of every attribute list.
    #[inline]
    pub fn kinds_count(&self) -> usize {
        self.tiles.len()
    }
}
