use crate::rules::{Kind, Project, TileKey};

// Single slot designations, last write wins. Kinds are not range checked.
impl Project {
    pub fn set_player(&mut self, kind: Option<Kind>) {
        self.player = kind;
    }

    pub fn set_world(&mut self, tile: Option<TileKey>) {
        self.world = tile;
    }

    pub fn set_default_tile(&mut self, kind: Kind) {
        self.default_tile = kind;
    }
}
