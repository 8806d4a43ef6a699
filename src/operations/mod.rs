pub mod intersect;
pub mod jump_arc;
pub mod simplify;
pub mod splice;

pub use intersect::{intersect, SegmentCrossing, SegmentIntersect};
pub use jump_arc::{create_jump_arc, JumpArc};
pub use simplify::{simplify, SimplifyPath};
pub use splice::{find_crossings, JumpSplice, JumpStyle, StrokeCrossing};
