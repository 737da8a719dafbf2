//! Squarified treemap layout.
//!
//! Tiles are laid out per hierarchy level: category rectangles first, then
//! each category's leaves inside its rectangle. Rows run along the shorter
//! side of the remaining space and grow while the worst aspect ratio in the
//! row keeps improving, which is what keeps tiles close to square.

use crate::core::data::TreeNode;

/// Gap between neighboring leaf tiles, in pixels.
const TILE_PADDING: f64 = 1.0;

/// One leaf rectangle of the laid-out hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Lay out every leaf under `root` inside a `width` × `height` surface.
///
/// Tile area is proportional to leaf value within the whole hierarchy; tiles
/// of a category stay contiguous. Leaves without a parseable value get
/// zero-sized tiles rather than being dropped.
pub fn layout(root: &TreeNode, width: f64, height: f64) -> Vec<Tile> {
    let surface = Rect {
        x: 0.0,
        y: 0.0,
        width,
        height,
    };

    let mut tiles = Vec::new();
    place_children(root, surface, root.total(), surface.area(), &mut tiles);

    for tile in &mut tiles {
        shrink(tile);
    }
    tiles
}

/// Category names in first-appearance order, for the legend.
pub fn categories(root: &TreeNode) -> Vec<String> {
    root.children.iter().map(|child| child.name.clone()).collect()
}

fn place_children(node: &TreeNode, rect: Rect, total: f64, surface_area: f64, out: &mut Vec<Tile>) {
    if node.children.is_empty() {
        return;
    }

    // Descending totals; squarify assumes largest-first rows.
    let mut order: Vec<usize> = (0..node.children.len()).collect();
    order.sort_by(|a, b| {
        node.children[*b]
            .total()
            .partial_cmp(&node.children[*a].total())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let areas: Vec<f64> = order
        .iter()
        .map(|i| {
            if total > 0.0 {
                node.children[*i].total() / total * surface_area
            } else {
                0.0
            }
        })
        .collect();

    let rects = squarify(&areas, rect);

    for (slot, child_index) in order.into_iter().enumerate() {
        let child = &node.children[child_index];
        let child_rect = rects[slot];

        if child.children.is_empty() {
            out.push(Tile {
                name: child.name.clone(),
                category: child
                    .category
                    .clone()
                    .unwrap_or_else(|| node.name.clone()),
                value: child.leaf_value(),
                x: child_rect.x,
                y: child_rect.y,
                width: child_rect.width,
                height: child_rect.height,
            });
        } else {
            place_children(child, child_rect, child.total(), child_rect.area(), out);
        }
    }
}

fn squarify(areas: &[f64], mut rect: Rect) -> Vec<Rect> {
    let mut rects = vec![Rect::ZERO; areas.len()];
    let mut start = 0;

    while start < areas.len() {
        let side = rect.width.min(rect.height);

        let mut end = start + 1;
        let mut best = worst_ratio(&areas[start..end], side);
        while end < areas.len() {
            let candidate = worst_ratio(&areas[start..=end], side);
            if candidate <= best {
                best = candidate;
                end += 1;
            } else {
                break;
            }
        }

        let row_sum: f64 = areas[start..end].iter().sum();
        if row_sum <= 0.0 || side <= 0.0 {
            for slot in rects.iter_mut().take(end).skip(start) {
                *slot = Rect {
                    x: rect.x,
                    y: rect.y,
                    width: 0.0,
                    height: 0.0,
                };
            }
            start = end;
            continue;
        }

        let thickness = row_sum / side;
        if rect.width >= rect.height {
            // Vertical strip on the left edge.
            let mut y = rect.y;
            for i in start..end {
                let item_height = areas[i] / thickness;
                rects[i] = Rect {
                    x: rect.x,
                    y,
                    width: thickness,
                    height: item_height,
                };
                y += item_height;
            }
            rect.x += thickness;
            rect.width -= thickness;
        } else {
            // Horizontal strip along the top edge.
            let mut x = rect.x;
            for i in start..end {
                let item_width = areas[i] / thickness;
                rects[i] = Rect {
                    x,
                    y: rect.y,
                    width: item_width,
                    height: thickness,
                };
                x += item_width;
            }
            rect.y += thickness;
            rect.height -= thickness;
        }

        start = end;
    }

    rects
}

fn worst_ratio(areas: &[f64], side: f64) -> f64 {
    let sum: f64 = areas.iter().sum();
    if sum <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let thickness = sum / side;
    areas
        .iter()
        .map(|area| {
            let other = area / thickness;
            if other <= 0.0 {
                f64::INFINITY
            } else {
                (thickness / other).max(other / thickness)
            }
        })
        .fold(0.0, f64::max)
}

fn shrink(tile: &mut Tile) {
    let inset = TILE_PADDING / 2.0;
    tile.x += inset;
    tile.y += inset;
    tile.width = (tile.width - TILE_PADDING).max(0.0);
    tile.height = (tile.height - TILE_PADDING).max(0.0);
}
