use std::io::{self, Write};

use crate::grids::tile_grid::TileGrid;
use crate::grids::{Object, ObjectKind, TileKind};

pub const GRID_SCALE: f32 = 1.3;
pub const SQUARE_GAP: f32 = 0.005;

/// Something a host hands painted tiles to.
pub trait Renderer {
    fn render(&mut self, tiles: &TileGrid) -> io::Result<()>;
}

pub fn glyph(tile: TileKind, object: Option<Object>) -> char {
    if let Some(object) = object {
        return match (object.kind, object.opened) {
            (ObjectKind::Door, false) => 'D',
            (ObjectKind::Door, true) => 'd',
            (ObjectKind::Chest, false) => 'C',
            (ObjectKind::Chest, true) => 'c',
            (ObjectKind::Key, _) => 'k',
        };
    }

    match tile {
        TileKind::Wall => '#',
        TileKind::Path => ' ',
        TileKind::Entrance => 'S',
        TileKind::Exit => 'E',
    }
}

/// Plain text, north row first.
pub struct AsciiRenderer<W: Write> {
    out: W,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, tiles: &TileGrid) -> io::Result<()> {
        let mut line = String::with_capacity(tiles.dims.width);
        for y in (0..tiles.dims.height).rev() {
            line.clear();
            for x in 0..tiles.dims.width {
                line.push(glyph(tiles.get_tile(x, y), tiles.get_object(x, y)));
            }
            writeln!(self.out, "{}", line)?;
        }

        self.out.flush()
    }
}

unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Square size and bottom left corner in normalized device coordinates for a viewport of
/// `size` pixels.
fn get_ndc_params(tiles: &TileGrid, size: (u32, u32)) -> (f32, f32, f32, f32) {
    let columns = tiles.dims.width as f32;
    let rows = tiles.dims.height as f32;
    let ratio = size.0 as f32 / size.1 as f32;
    let (sq_width, sq_height) = if ratio >= 1.0 {
        (GRID_SCALE / columns / ratio, GRID_SCALE / rows)
    } else {
        (GRID_SCALE / columns, GRID_SCALE / rows * ratio)
    };

    let bottom_left_x = (2.0 - (GRID_SCALE + (columns * SQUARE_GAP))) / 2.0 - 1.0;
    let bottom_left_y = (2.0 - (GRID_SCALE + (rows * SQUARE_GAP))) / 2.0 - 1.0;

    (sq_width, sq_height, bottom_left_x, bottom_left_y)
}

/// Two triangles per tile, colored by object if any, else by tile kind.
pub fn vertices(tiles: &TileGrid, size: (u32, u32)) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(tiles.tiles.len() * 6);
    if tiles.tiles.is_empty() || size.0 == 0 || size.1 == 0 {
        return verts;
    }

    let (sq_width, sq_height, center_x, center_y) = get_ndc_params(tiles, size);

    let mut offset_x = center_x;
    let mut offset_y = center_y;

    for y in 0..tiles.dims.height {
        for x in 0..tiles.dims.width {
            let low_x = offset_x;
            let low_y = offset_y;

            let up_x = low_x + sq_width;
            let up_y = low_y + sq_height;

            let color: [f32; 4] = match tiles.get_object(x, y) {
                Some(object) => object.into(),
                None => tiles.get_tile(x, y).into(),
            };

            verts.extend_from_slice(&[
                // lower left triangle
                Vertex {
                    position: [low_x, low_y],
                    color,
                },
                Vertex {
                    position: [up_x, low_y],
                    color,
                },
                Vertex {
                    position: [low_x, up_y],
                    color,
                },
                // upper right triangle
                Vertex {
                    position: [low_x, up_y],
                    color,
                },
                Vertex {
                    position: [up_x, low_y],
                    color,
                },
                Vertex {
                    position: [up_x, up_y],
                    color,
                },
            ]);

            offset_x += sq_width + SQUARE_GAP;
        }
        offset_y += sq_height + SQUARE_GAP;
        offset_x = center_x;
    }

    verts
}

/// Writes a raw triangle list, ready to upload as a vertex buffer.
pub struct VertexRenderer<W: Write> {
    pub size: (u32, u32),
    out: W,
}

impl<W: Write> VertexRenderer<W> {
    pub fn new(out: W, size: (u32, u32)) -> Self {
        Self { size, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for VertexRenderer<W> {
    fn render(&mut self, tiles: &TileGrid) -> io::Result<()> {
        let verts = vertices(tiles, self.size);
        log::debug!("writing {} vertices", verts.len());
        self.out.write_all(bytemuck::cast_slice(&verts))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod test_renderer {
    use super::*;
    use crate::model::{MazeConfig, MazeModel};

    fn painted(width: usize, height: usize, seed: i64) -> TileGrid {
        let config = MazeConfig {
            width,
            height,
            seed,
            ..MazeConfig::default()
        };
        let painter = config.painter();
        let mut model = MazeModel::new(config);
        model.generate();
        model.paint(&painter).cloned().unwrap()
    }

    #[test]
    fn ascii_has_one_line_per_row() {
        let tiles = painted(4, 3, 12);
        let mut renderer = AsciiRenderer::new(Vec::new());
        renderer.render(&tiles).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.chars().count() == 9));

        // entrance on the top row, door over the exit on the bottom row
        assert_eq!(lines[0].chars().nth(1), Some('S'));
        assert_eq!(lines[6].chars().nth(7), Some('D'));
        assert!(lines[0].starts_with("#S###"));
    }

    #[test]
    fn ascii_single_cell() {
        let config = MazeConfig {
            width: 1,
            height: 1,
            seed: 1,
            chests: 0,
            keys: 0,
            door: false,
        };
        let painter = config.painter();
        let mut model = MazeModel::new(config);
        model.generate();
        let tiles = model.paint(&painter).unwrap();

        let mut renderer = AsciiRenderer::new(Vec::new());
        renderer.render(tiles).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "#S#\n# #\n#E#\n");
    }

    #[test]
    fn opened_objects_use_lower_case() {
        assert_eq!(glyph(TileKind::Exit, Some(Object::closed(ObjectKind::Door))), 'D');
        let opened = Object {
            kind: ObjectKind::Chest,
            opened: true,
        };
        assert_eq!(glyph(TileKind::Path, Some(opened)), 'c');
        assert_eq!(glyph(TileKind::Wall, None), '#');
    }

    #[test]
    fn six_vertices_per_tile() {
        let tiles = painted(5, 5, 99);
        let verts = vertices(&tiles, (800, 600));
        assert_eq!(verts.len(), 11 * 11 * 6);
        assert!(verts
            .iter()
            .all(|v| v.position.iter().all(|p| *p >= -1.0 && *p <= 1.0)));
    }

    #[test]
    fn vertex_bytes_match_layout() {
        let tiles = painted(2, 2, 5);
        let mut renderer = VertexRenderer::new(Vec::new(), (640, 640));
        renderer.render(&tiles).unwrap();
        let bytes = renderer.into_inner();

        assert_eq!(bytes.len(), 5 * 5 * 6 * std::mem::size_of::<Vertex>());
        let expected = vertices(&tiles, (640, 640));
        assert_eq!(&bytes[..], bytemuck::cast_slice::<Vertex, u8>(&expected));
    }
}
