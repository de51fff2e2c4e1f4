//! The hint-analysis shapes this crate consumes: segments, edges, blue-zone
//! associations and classified points. None of this is computed here; it is
//! handed in by whatever auto-hinting analysis a [`crate::HintSource`] wraps.

/// A contiguous run of points belonging to one contour.
///
/// `first > last` marks a segment that wraps around the contour's
/// last-to-first boundary; see [`Segment::is_wrap_around`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Index of the segment's first point, in the glyph's raw point numbering.
    pub first: u16,
    /// Index of the segment's last point, in the glyph's raw point numbering.
    pub last: u16,
}

impl Segment {
    /// A segment wraps if it was split at the contour boundary: its `first`
    /// point comes after its `last` point in raw point order.
    #[must_use]
    pub const fn is_wrap_around(self) -> bool {
        self.first > self.last
    }
}

const EDGE_SERIF: u8 = 0x01;
const EDGE_ROUND: u8 = 0x02;

/// Bit flags describing an [`Edge`]'s shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The edge is the near side of a serif.
    pub const SERIF: Self = Self(EDGE_SERIF);
    /// The edge belongs to a round stem.
    pub const ROUND: Self = Self(EDGE_ROUND);

    /// Combines two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every bit set in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// An edge's association with a blue zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueAssociation {
    /// Index into the style's blue-zone table.
    pub blue_idx: u16,
    /// Whether the edge is aligned to the zone's overshoot (shoot) value
    /// rather than its reference value.
    pub is_shoot: bool,
}

/// A straight or round stem edge, built from one or more [`Segment`]s.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Indices into the glyph's segment list forming this edge's circular
    /// link list; `segments[0]` is the edge's anchor segment.
    pub segments: Vec<u16>,
    /// Shape flags.
    pub flags: EdgeFlags,
    /// Blue-zone association, if any.
    pub blue: Option<BlueAssociation>,
}

impl Edge {
    /// The edge's anchor segment index (called `first` in the analysis).
    ///
    /// # Panics
    ///
    /// Panics if the edge has no segments; a well-formed edge always has at
    /// least one.
    #[must_use]
    pub fn anchor_segment(&self) -> u16 {
        self.segments[0]
    }

    /// Whether the edge is the near side of a serif.
    #[must_use]
    pub fn is_serif(&self) -> bool {
        self.flags.contains(EdgeFlags::SERIF)
    }

    /// Whether the edge belongs to a round stem.
    #[must_use]
    pub fn is_round(&self) -> bool {
        self.flags.contains(EdgeFlags::ROUND)
    }
}

const POINT_WEAK_INTERPOLATION: u8 = 0x01;

/// Bit flags describing a point's classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointFlags(u8);

impl PointFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The point only ever takes part in weak (IUP-style) interpolation.
    pub const WEAK_INTERPOLATION: Self = Self(POINT_WEAK_INTERPOLATION);

    /// Whether every bit set in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A classified point, as handed to an [`super::points::OrderedPointSets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    /// Raw point index within the glyph (before composite remapping).
    pub index: u16,
}
