use crate::rules::RulesError::{KindNotFound, TileNameNotFound, TileNotFound};
use crate::rules::{Kind, Project, RulesError, Tile, TileKey};

impl Project {
    pub fn fixed(&self) -> &[Tile] {
        &self.tiles[..self.fixed]
    }

    pub fn movable(&self) -> &[Tile] {
        &self.tiles[self.fixed..]
    }

    pub fn all(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get_image(&self, kind: Kind) -> Result<&Tile, RulesError> {
        self.tiles.get(kind.0).ok_or(KindNotFound { kind })
    }

    pub fn get_kind(&self, tile: TileKey) -> Result<Kind, RulesError> {
        self.tiles
            .iter()
            .position(|search| search.key == tile)
            .map(Kind)
            .ok_or(TileNotFound { tile })
    }

    pub fn find_tile(&self, name: &str) -> Result<&Tile, RulesError> {
        self.tiles
            .iter()
            .find(|tile| tile.name == name)
            .ok_or(TileNameNotFound {
                name: name.to_string(),
            })
    }

    pub fn player(&self) -> Option<Kind> {
        self.player
    }

    pub fn world(&self) -> Option<TileKey> {
        self.world
    }

    pub fn default_tile(&self) -> Kind {
        self.default_tile
    }
}
