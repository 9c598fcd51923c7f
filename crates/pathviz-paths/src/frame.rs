use pathviz_core::Point;

/// What an [`AnimationFrame`] records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrameKind {
    /// The node left the frontier and was examined.
    Visit,
    /// The node belongs to the reconstructed route. Path frames are emitted
    /// in start → end order.
    Path,
}

/// One ordered unit of search progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrame {
    pub kind: FrameKind,
    pub pos: Point,
}

impl AnimationFrame {
    /// A [`FrameKind::Visit`] frame.
    #[inline]
    pub const fn visit(pos: Point) -> Self {
        Self {
            kind: FrameKind::Visit,
            pos,
        }
    }

    /// A [`FrameKind::Path`] frame.
    #[inline]
    pub const fn path(pos: Point) -> Self {
        Self {
            kind: FrameKind::Path,
            pos,
        }
    }

    #[inline]
    pub fn is_visit(&self) -> bool {
        self.kind == FrameKind::Visit
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.kind == FrameKind::Path
    }
}

/// Number of visit frames.
pub fn visit_count(frames: &[AnimationFrame]) -> usize {
    frames.iter().filter(|f| f.is_visit()).count()
}

/// Number of path frames, i.e. the number of nodes on the route.
pub fn path_len(frames: &[AnimationFrame]) -> usize {
    frames.iter().filter(|f| f.is_path()).count()
}

/// The route, start first. Empty when the end was not reached.
pub fn path_of(frames: &[AnimationFrame]) -> Vec<Point> {
    frames.iter().filter(|f| f.is_path()).map(|f| f.pos).collect()
}

/// Whether the search failed to reach the end.
pub fn is_unreachable(frames: &[AnimationFrame]) -> bool {
    !frames.iter().any(AnimationFrame::is_path)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn frame_json_shape() {
        let f = AnimationFrame::visit(Point::new(3, 7));
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"{"kind":"visit","pos":{"x":3,"y":7}}"#);
    }
}
