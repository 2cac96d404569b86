use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// SeriesData – x values with a variable-width row of y values each
// ---------------------------------------------------------------------------

/// Two aligned sequences read from a series file: `x[i]` is the leading
/// token of record `i` and `y[i]` holds the remaining tokens of that record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesData {
    /// Independent variable, one per record.
    pub x: Vec<f64>,
    /// Dependent values – same length as `x`, rows may differ in width.
    pub y: Vec<Vec<f64>>,
}

impl SeriesData {
    /// Append one record.
    pub fn push(&mut self, x: f64, ys: Vec<f64>) {
        self.x.push(x);
        self.y.push(ys);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether no records were read.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate records as `(x, y-row)`.
    pub fn records(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.x.iter().copied().zip(self.y.iter().map(Vec::as_slice))
    }

    /// Smallest and largest x, or `None` for an empty series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.x.iter().copied();
        let first = iter.next()?;
        let range = iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
        Some(range)
    }

    /// Widest y row; the number of lines a plotter would draw.
    pub fn max_width(&self) -> usize {
        self.y.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Points `(x, y[j])` of the j-th y column, skipping rows too short to
    /// have one.
    pub fn column(&self, j: usize) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        for (x, ys) in self.records() {
            if let Some(&y) = ys.get(j) {
                points.push((x, y));
            }
        }
        points
    }
}

// ---------------------------------------------------------------------------
// Coordinate / Bounds
// ---------------------------------------------------------------------------

/// A projected (Cartesian) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned extent of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn of(c: Coordinate) -> Self {
        Self {
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
        }
    }

    fn extend(mut self, c: Coordinate) -> Self {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
        self
    }

    fn union(self, other: Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// ---------------------------------------------------------------------------
// Neighbourhood – one named polygon outline
// ---------------------------------------------------------------------------

/// A neighbourhood entry: legend index (when tracked) and its outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Neighbourhood {
    /// Sequential index assigned from the name line, starting at 1.
    pub index: Option<usize>,
    /// Outline vertices in file order. The ring is not closed here.
    pub coordinates: Vec<Coordinate>,
}

impl Neighbourhood {
    pub fn new(index: Option<usize>) -> Self {
        Self {
            index,
            coordinates: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.coordinates.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(Bounds::of(first), Bounds::extend))
    }
}

// ---------------------------------------------------------------------------
// NeighbourhoodMap – insertion-ordered name → Neighbourhood
// ---------------------------------------------------------------------------

/// Neighbourhoods keyed by name, iterated in declaration order.
///
/// Re-declaring a name resets its entry in place: the entry keeps the
/// position of its first declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighbourhoodMap {
    entries: Vec<(String, Neighbourhood)>,
    lookup: HashMap<String, usize>,
}

impl NeighbourhoodMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh entry, replacing any existing one with the same name.
    /// Returns `true` if the name was already present.
    pub fn reset(&mut self, name: &str, entry: Neighbourhood) -> bool {
        match self.lookup.get(name) {
            Some(&pos) => {
                self.entries[pos].1 = entry;
                true
            }
            None => {
                self.lookup.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), entry));
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Neighbourhood> {
        self.lookup.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Neighbourhood> {
        self.lookup.get(name).map(|&pos| &mut self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Neighbourhood)> {
        self.entries.iter().map(|(name, n)| (name.as_str(), n))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Total number of coordinates across all entries.
    pub fn coordinate_count(&self) -> usize {
        self.entries.iter().map(|(_, n)| n.coordinates.len()).sum()
    }

    /// Extent of every coordinate in the map.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds = self.entries.iter().filter_map(|(_, n)| n.bounds());
        let first = bounds.next()?;
        Some(bounds.fold(first, Bounds::union))
    }
}

/// Serialises as a JSON object whose key order follows declaration order.
impl Serialize for NeighbourhoodMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}
