//! Built-in defaults: the starter asset catalog and the colour palette.

use crate::{
  asset::Asset,
  entity::Entity,
  geometry::Point,
  palette::Palette,
};

/// `(id, name, category, w, h, color, snap)`
type Template = (&'static str, &'static str, &'static str, f64, f64, &'static str, bool);

const TEMPLATES: &[Template] = &[
  // Rooms
  ("a_room6", "洋室 (6畳)", "room", 360.0, 270.0, "#fdfcdc", true),
  ("a_ldk10", "LDK (10畳)", "room", 360.0, 450.0, "#fffbf0", true),
  ("a_ent", "玄関ホール", "room", 135.0, 135.0, "#f0e68c", true),
  ("a_toilet", "トイレ (0.4坪)", "room", 90.0, 135.0, "#e6e6fa", true),
  ("a_bath", "浴室 (1坪)", "room", 160.0, 160.0, "#b0e0e6", true),
  ("a_balcony", "ベランダ", "room", 360.0, 90.0, "#d3d3d3", true),
  // Fixtures
  ("a_kitchen", "キッチン(2100)", "fixture", 210.0, 65.0, "#cccccc", true),
  ("a_pan", "防水パン", "fixture", 64.0, 64.0, "#ffffff", true),
  ("a_door", "ドア(片開)", "fixture", 80.0, 5.0, "#8b4513", true),
  ("a_window", "窓(掃出し)", "fixture", 180.0, 5.0, "#87ceeb", true),
  // Furniture
  ("a_bed_s", "ベッド(S)", "furniture", 100.0, 200.0, "#8fbc8f", true),
  ("a_sofa2", "ソファ(2人)", "furniture", 160.0, 90.0, "#f4a460", true),
  ("a_table4", "食卓(140)", "furniture", 140.0, 80.0, "#8b4513", true),
  ("a_tvboard", "TVボード", "furniture", 150.0, 45.0, "#deb887", true),
  ("a_fridge", "冷蔵庫", "furniture", 60.0, 65.0, "#aaddff", true),
  ("a_drum", "ドラム式", "furniture", 64.0, 60.0, "#dcdcdc", true),
  ("a_chair", "椅子", "furniture", 45.0, 45.0, "#cd853f", false),
];

const SWATCHES: &[&str] = &[
  "#f43f5e", "#fb923c", "#facc15", "#4ade80", "#22d3d8", "#3b82f6", "#8b5cf6",
  "#ec4899", "#78716c", "#1e293b", "#ffffff", "#fdfcdc", "#fffbf0", "#f0e68c",
  "#e6e6fa", "#b0e0e6", "#d3d3d3", "#cccccc", "#8b4513", "#87ceeb",
];

const CATEGORY_COLORS: &[(&str, &str)] = &[
  ("room", "#fdfcdc"),
  ("furniture", "#8fbc8f"),
  ("fixture", "#cccccc"),
];

/// Corners of a `w` x `h` rectangle anchored at the origin, clockwise.
pub fn rect_points(w: f64, h: f64) -> Vec<Point> {
  vec![
    Point::corner(0.0, 0.0),
    Point::corner(w, 0.0),
    Point::corner(w, h),
    Point::corner(0.0, h),
  ]
}

/// The catalog written to a fresh data directory.
pub fn default_assets() -> Vec<Asset> {
  TEMPLATES
    .iter()
    .map(|&(id, name, kind, w, h, color, snap)| Asset {
      id: id.to_owned(),
      name: name.to_owned(),
      kind: kind.to_owned(),
      w,
      h,
      color: color.to_owned(),
      entities: vec![Entity::polygon(rect_points(w, h), color)],
      is_default_shape: true,
      snap,
      bound_x: None,
      bound_y: None,
    })
    .collect()
}

pub fn default_palette() -> Palette {
  Palette {
    colors:   SWATCHES.iter().map(|&c| c.to_owned()).collect(),
    defaults: CATEGORY_COLORS
      .iter()
      .map(|&(category, color)| (category.to_owned(), color.to_owned()))
      .collect(),
    extra:    Default::default(),
  }
}
