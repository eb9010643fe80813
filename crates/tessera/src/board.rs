//! Tiled game boards composed from [`RectangleShape`]s.
//!
//! A [`Board`] lays out `rows x columns` square tiles in alternating colors
//! under a root `svg` element, and can overlay translucent highlights on
//! individual squares or turn the whole board around to show it from the
//! opposite side.

use std::{fmt, str::FromStr};

use log::debug;

use tessera_core::{
    draw::{RectangleAttributes, RectangleShape},
    geometry::{Point, Size},
    scene::{SvgElement, SvgScene},
};

use crate::{
    config::{BoardConfig, StyleConfig},
    error::TesseraError,
};

/// A board coordinate. Row `0` is the top row, column `0` the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: usize,
    column: usize,
}

impl Square {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn column(self) -> usize {
        self.column
    }
}

impl FromStr for Square {
    type Err = String;

    /// Parses `"row,column"`, e.g. `"6,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid square `{s}`, expected `row,column`"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid square `{s}`: {err}"))
        };
        Ok(Self::new(parse(row)?, parse(column)?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// A rendered board backed by a retained SVG scene.
#[derive(Debug)]
pub struct Board {
    scene: SvgScene,
    root: SvgElement,
    rows: usize,
    columns: usize,
    tile_size: f32,
    tiles: Vec<RectangleShape<SvgElement>>,
    highlights: Vec<(Square, RectangleShape<SvgElement>)>,
    highlight_color: String,
    highlight_opacity: f32,
    flipped: bool,
}

impl Board {
    /// Builds every tile and attaches it under a new root element.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Config`] if a configured color cannot be
    /// parsed or the board has more than
    /// [`MAX_TILES`](crate::config::MAX_TILES) tiles.
    pub fn new(
        scene: SvgScene,
        board: &BoardConfig,
        style: &StyleConfig,
    ) -> Result<Self, TesseraError> {
        let tile_count = board.tile_count().map_err(TesseraError::Config)?;
        let light = style.light_color().map_err(TesseraError::Config)?;
        let dark = style.dark_color().map_err(TesseraError::Config)?;
        let highlight_color = style
            .highlight_color()
            .map_err(TesseraError::Config)?
            .to_string();
        let background = style.background_color().map_err(TesseraError::Config)?;

        let tile_size = board.tile_size();
        let size = Size::new(
            board.columns() as f32 * tile_size,
            board.rows() as f32 * tile_size,
        );
        let root = scene.create_root(size.width(), size.height());

        if let Some(background) = background {
            let backdrop = RectangleShape::from_attributes(
                &scene,
                &RectangleAttributes::new(size.height(), size.width()).with_color(background),
            );
            root.append_child(backdrop.element());
        }

        let mut tiles = Vec::with_capacity(tile_count);
        for row in 0..board.rows() {
            for column in 0..board.columns() {
                let color = if (row + column) % 2 == 0 { light } else { dark };
                let attributes = RectangleAttributes::new(tile_size, tile_size)
                    .with_position(column as f32 * tile_size, row as f32 * tile_size)
                    .with_color(color);
                let tile = RectangleShape::from_attributes(&scene, &attributes);
                root.append_child(tile.element());
                tiles.push(tile);
            }
        }

        debug!(rows = board.rows(), columns = board.columns(), tile_size; "Board built");

        Ok(Self {
            scene,
            root,
            rows: board.rows(),
            columns: board.columns(),
            tile_size,
            tiles,
            highlights: Vec::new(),
            highlight_color,
            highlight_opacity: style.highlight_opacity(),
            flipped: false,
        })
    }

    /// Pixel size of the whole board.
    pub fn size(&self) -> Size {
        Size::new(
            self.columns as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// The root `svg` element all tiles and overlays are attached to.
    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    pub fn tile(&self, square: Square) -> Option<&RectangleShape<SvgElement>> {
        self.index_of(square).map(|index| &self.tiles[index])
    }

    pub fn tile_mut(&mut self, square: Square) -> Option<&mut RectangleShape<SvgElement>> {
        self.index_of(square).map(|index| &mut self.tiles[index])
    }

    /// Squares that currently carry a highlight overlay, in the order they were added.
    pub fn highlighted(&self) -> Vec<Square> {
        self.highlights.iter().map(|(square, _)| *square).collect()
    }

    /// Places a translucent overlay on `square`.
    ///
    /// Highlighting a square twice reuses the existing overlay.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Board`] if `square` is outside the board.
    pub fn highlight(
        &mut self,
        square: Square,
    ) -> Result<&mut RectangleShape<SvgElement>, TesseraError> {
        self.check_square(square)?;

        let index = match self.highlights.iter().position(|(s, _)| *s == square) {
            Some(index) => index,
            None => {
                let origin = self.tile_origin(square);
                let attributes = RectangleAttributes::new(self.tile_size, self.tile_size)
                    .with_position(origin.x(), origin.y())
                    .with_color(&self.highlight_color)
                    .with_opacity(self.highlight_opacity);
                let mut overlay = RectangleShape::from_attributes(&self.scene, &attributes);
                if self.flipped {
                    let center = self.center();
                    overlay.rotate(180.0, center.x(), center.y());
                }
                self.root.append_child(overlay.element());
                self.highlights.push((square, overlay));
                debug!(square = square.to_string(); "Square highlighted");
                self.highlights.len() - 1
            }
        };

        Ok(&mut self.highlights[index].1)
    }

    /// Removes every highlight overlay from the scene.
    pub fn clear_highlights(&mut self) {
        for (_, overlay) in self.highlights.drain(..) {
            self.root.remove_child(overlay.element());
        }
    }

    /// Turns the board around its center so it is seen from the opposite side.
    ///
    /// Flipping twice restores the original view.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        let degrees = if self.flipped { 180.0 } else { 0.0 };
        let center = self.center();

        let overlays = self.highlights.iter_mut().map(|(_, overlay)| overlay);
        for shape in self.tiles.iter_mut().chain(overlays) {
            shape.rotate(degrees, center.x(), center.y());
        }

        debug!(flipped = self.flipped; "Board flipped");
    }

    /// Serializes the current scene as SVG markup.
    pub fn render(&self) -> String {
        self.root.render()
    }

    fn center(&self) -> Point {
        self.size().center_from(Point::default())
    }

    fn tile_origin(&self, square: Square) -> Point {
        Point::new(
            square.column() as f32 * self.tile_size,
            square.row() as f32 * self.tile_size,
        )
    }

    fn index_of(&self, square: Square) -> Option<usize> {
        (square.row() < self.rows && square.column() < self.columns)
            .then(|| square.row() * self.columns + square.column())
    }

    fn check_square(&self, square: Square) -> Result<(), TesseraError> {
        self.index_of(square).map(|_| ()).ok_or_else(|| {
            TesseraError::Board(format!(
                "square {square} is outside the {}x{} board",
                self.rows, self.columns
            ))
        })
    }
}
