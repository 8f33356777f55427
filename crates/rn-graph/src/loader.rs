//! CSV snapshot loader.
//!
//! # CSV format
//!
//! One row per segment.  Connector columns are left empty on ordinary
//! segments.
//!
//! ```csv
//! id,name,length,is_connector,from_segment,to_segment,from_offset,to_offset,lane_count,lane_widths,polyline
//! 101,12-0-Right Start,40,false,,,,,1,3.5,0 0;40 0
//! 102,12-0-Right,60,false,,,,,1,3.5,45 0;105 0
//! 10005,,5,true,101,102,40,0,1,3.5,40 0;45 0
//! ```
//!
//! | Column        | Encoding                                        |
//! |---------------|-------------------------------------------------|
//! | `lane_widths` | `;`-separated metres, lane 1 (rightmost) first  |
//! | `polyline`    | `;`-separated `x y` pairs                       |
//!
//! `lane_count` must agree with the number of widths given.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rn_core::{Point2, SegmentId};

use crate::{ConnectorEnds, GraphError, GraphResult, LinkGraphBuilder, LinkGraphStore, Segment};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    id:           u32,
    #[serde(default)]
    name:         String,
    length:       f64,
    is_connector: bool,
    from_segment: Option<u32>,
    to_segment:   Option<u32>,
    from_offset:  Option<f64>,
    to_offset:    Option<f64>,
    lane_count:   usize,
    lane_widths:  String,
    polyline:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a segment snapshot from a CSV file and build the store.
pub fn load_segments_csv(path: &Path) -> GraphResult<LinkGraphStore> {
    let file = std::fs::File::open(path)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> GraphResult<LinkGraphStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = LinkGraphBuilder::new();

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        builder.add_segment(into_segment(row)?)?;
    }

    log::info!("loaded {} segments from CSV", builder.segment_count());
    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn into_segment(row: SegmentRecord) -> GraphResult<Segment> {
    let id = SegmentId(row.id);
    let lane_widths = parse_widths(&row.lane_widths, id)?;
    if lane_widths.len() != row.lane_count {
        return Err(GraphError::Parse(format!(
            "segment {}: lane_count {} but {} widths given",
            row.id,
            row.lane_count,
            lane_widths.len()
        )));
    }
    let polyline = parse_polyline(&row.polyline, id)?;

    if !row.is_connector {
        return Ok(Segment::link(id, row.name, row.length, lane_widths, polyline));
    }

    let (Some(from), Some(to)) = (row.from_segment, row.to_segment) else {
        return Err(GraphError::Parse(format!(
            "connector {} is missing from_segment or to_segment",
            row.id
        )));
    };
    let ends = ConnectorEnds {
        from:        SegmentId(from),
        to:          SegmentId(to),
        from_offset: row.from_offset.unwrap_or(0.0),
        to_offset:   row.to_offset.unwrap_or(0.0),
    };
    let mut seg = Segment::connector(id, row.length, ends, lane_widths, polyline);
    seg.name = row.name;
    Ok(seg)
}

fn parse_widths(s: &str, id: SegmentId) -> GraphResult<Vec<f64>> {
    s.split(';')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| {
            w.parse::<f64>()
                .map_err(|_| GraphError::Parse(format!("{id}: invalid lane width {w:?}")))
        })
        .collect()
}

fn parse_polyline(s: &str, id: SegmentId) -> GraphResult<Vec<Point2>> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let mut it = pair.split_whitespace().map(str::parse::<f64>);
            match (it.next(), it.next(), it.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => Ok(Point2::new(x, y)),
                _ => Err(GraphError::Parse(format!(
                    "{id}: invalid polyline point {pair:?}, expected \"x y\""
                ))),
            }
        })
        .collect()
}
