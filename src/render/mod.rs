/*!
# Rendering

Drawing a graph to a raster image.

Node positions are sampled uniformly at random inside the canvas margins;
a candidate closer than the minimum separation to an already-placed node
is rejected and re-sampled, up to a fixed attempt budget per node. Once
the budget is exhausted the last sample is kept as-is, which keeps
placement total even for dense graphs. Edges are then drawn as straight
lines and nodes as labeled circles on top.

Randomness comes from a caller-supplied [`Rng`], so seeding a
deterministic generator yields a reproducible layout.
*/

use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use rand::Rng;
use tracing::info;

use crate::{edge::Edge, node::*, ops::*};

/// 2D position of a node on the canvas
pub type Position = (f32, f32);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE_COLOR: Rgb<u8> = Rgb([158, 158, 158]);
const NODE_COLOR: Rgb<u8> = Rgb([70, 130, 180]);
const SHADOW_COLOR: Rgb<u8> = Rgb([120, 120, 120]);
const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Offset of the drop shadow below each node circle
const SHADOW_OFFSET: i32 = 3;

/// Renders a graph to an RGB raster image.
///
/// Configure the canvas via the setter methods, then call
/// [`Renderer::render`] or [`Renderer::render_to_file`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: u32,
    height: u32,
    margin: u32,
    min_separation: f32,
    placement_attempts: u32,
    node_radius: i32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1500,
            margin: 200,
            min_separation: 100.0,
            placement_attempts: 100,
            node_radius: 20,
        }
    }
}

impl Renderer {
    /// Creates a new (default) renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the canvas dimensions
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Updates the margin kept free around the canvas border
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Updates the minimum distance between two node centers
    pub fn min_separation(mut self, separation: f32) -> Self {
        self.min_separation = separation;
        self
    }

    /// Updates the rejection-sampling budget per node
    pub fn placement_attempts(mut self, attempts: u32) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Updates the node circle radius
    pub fn node_radius(mut self, radius: i32) -> Self {
        self.node_radius = radius;
        self
    }

    /// Samples one position per node, rejecting candidates closer than
    /// the minimum separation to any already-placed node until the
    /// attempt budget is exhausted (the last candidate is then kept).
    ///
    /// ** Panics if the margins leave no room on the canvas **
    pub fn layout<G, R>(&self, graph: &G, rng: &mut R) -> Vec<Position>
    where
        G: GraphNodeOrder,
        R: Rng,
    {
        assert!(self.width > 2 * self.margin && self.height > 2 * self.margin);

        let mut positions: Vec<Position> = Vec::with_capacity(graph.len());

        for _ in graph.vertices() {
            let mut candidate = self.sample_position(rng);
            for _ in 1..self.placement_attempts {
                if self.is_separated(candidate, &positions) {
                    break;
                }
                candidate = self.sample_position(rng);
            }
            positions.push(candidate);
        }

        positions
    }

    fn sample_position<R: Rng>(&self, rng: &mut R) -> Position {
        let x = rng.random_range(self.margin..self.width - self.margin);
        let y = rng.random_range(self.margin..self.height - self.margin);
        (x as f32, y as f32)
    }

    fn is_separated(&self, candidate: Position, placed: &[Position]) -> bool {
        placed
            .iter()
            .all(|&p| distance(candidate, p) >= self.min_separation)
    }

    /// Draws the graph onto a fresh canvas and returns the image
    pub fn render<G, R>(&self, graph: &G, rng: &mut R) -> RgbImage
    where
        G: GraphNodeOrder + EdgeStorage,
        R: Rng,
    {
        let positions = self.layout(graph, rng);
        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        for record in graph.edge_records() {
            let Edge(u, v) = record.endpoints();
            draw_line_segment_mut(
                &mut canvas,
                positions[u as usize],
                positions[v as usize],
                EDGE_COLOR,
            );
        }

        for u in graph.vertices() {
            let (x, y) = positions[u as usize];
            let center = (x as i32, y as i32);

            draw_filled_circle_mut(
                &mut canvas,
                (center.0 + SHADOW_OFFSET, center.1 + SHADOW_OFFSET),
                self.node_radius,
                SHADOW_COLOR,
            );
            draw_filled_circle_mut(&mut canvas, center, self.node_radius, NODE_COLOR);
            draw_label(&mut canvas, center, u);
        }

        canvas
    }

    /// Renders the graph and writes it to `path` in the image format
    /// matching the file extension (e.g. `.png`)
    pub fn render_to_file<G, R, P>(&self, graph: &G, rng: &mut R, path: P) -> ImageResult<()>
    where
        G: GraphNodeOrder + EdgeStorage,
        R: Rng,
        P: AsRef<Path>,
    {
        self.render(graph, rng).save(&path)?;
        info!(path = %path.as_ref().display(), "wrote graph image");
        Ok(())
    }
}

fn distance(a: Position, b: Position) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// 3x5 pixel glyphs for the decimal digits, rows top-down, msb-left
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const GLYPH_SCALE: i32 = 3;
const GLYPH_WIDTH: i32 = 3 * GLYPH_SCALE;
const GLYPH_HEIGHT: i32 = 5 * GLYPH_SCALE;
const GLYPH_GAP: i32 = GLYPH_SCALE;

/// Draws the node id centered on `center` using the built-in digit glyphs
fn draw_label(canvas: &mut RgbImage, center: (i32, i32), id: Node) {
    let mut digits = Vec::new();
    let mut rest = id;
    loop {
        digits.push(rest % 10);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();

    let total_width =
        digits.len() as i32 * GLYPH_WIDTH + (digits.len() as i32 - 1) * GLYPH_GAP;
    let mut x = center.0 - total_width / 2;
    let y = center.1 - GLYPH_HEIGHT / 2;

    for digit in digits {
        draw_digit(canvas, x, y, digit);
        x += GLYPH_WIDTH + GLYPH_GAP;
    }
}

fn draw_digit(canvas: &mut RgbImage, x0: i32, y0: i32, digit: Node) {
    let glyph = &DIGITS[digit as usize];

    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..3i32 {
            if *bits & (0b100 >> col) == 0 {
                continue;
            }
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    let x = x0 + col * GLYPH_SCALE + dx;
                    let y = y0 + row as i32 * GLYPH_SCALE + dy;
                    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height()
                    {
                        canvas.put_pixel(x as u32, y as u32, LABEL_COLOR);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn layout_stays_within_the_margins() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let graph = GraphStore::new(10);
        let renderer = Renderer::new();

        let positions = renderer.layout(&graph, rng);
        assert_eq!(positions.len(), 10);
        assert!(positions
            .iter()
            .all(|&(x, y)| (200.0..1300.0).contains(&x) && (200.0..1300.0).contains(&y)));
    }

    #[test]
    fn layout_respects_the_minimum_separation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = GraphStore::new(5);

        let positions = Renderer::new().layout(&graph, rng);
        for (a, b) in positions.iter().tuple_combinations() {
            assert!(distance(*a, *b) >= 100.0);
        }
    }

    #[test]
    fn exhausted_budget_still_places_every_node() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = GraphStore::new(12);

        // a canvas far too small for 12 well-separated nodes
        let positions = Renderer::new()
            .canvas(220, 220)
            .margin(100)
            .min_separation(50.0)
            .layout(&graph, rng);

        assert_eq!(positions.len(), 12);
    }

    #[test]
    fn render_produces_the_configured_canvas() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let graph = GraphStore::try_from_edges(2, [(0, 1)]).unwrap();

        let image = Renderer::new().canvas(800, 600).margin(50).render(&graph, rng);
        assert_eq!((image.width(), image.height()), (800, 600));

        // nodes and the connecting line are visible on the canvas
        assert!(image.pixels().any(|p| *p == NODE_COLOR));
        assert!(image.pixels().any(|p| *p == EDGE_COLOR));
    }

    #[test]
    fn render_to_file_writes_an_image() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = GraphStore::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");

        Renderer::new().render_to_file(&graph, rng, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn empty_graph_renders_a_blank_canvas() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let graph = GraphStore::new(0);

        let image = Renderer::new().render(&graph, rng);
        assert!(image.pixels().all(|p| *p == BACKGROUND));
    }
}
