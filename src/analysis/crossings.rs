//! Detection of text lines whose trace leaves their assigned region.

use std::collections::HashSet;

use super::findings::{CrossingFinding, CrossingKind};
use crate::geometry::{point_in_polygon, segment_polygon_intersections};
use crate::page::{Region, RegionId, TextLine};

/// Finds text lines that physically extend into a region other than the
/// one they are assigned to.
///
/// Two passes per line, both restricted to regions the line is *not*
/// assigned to:
///
/// 1. **Vertex pass** — a trace vertex lying inside a foreign region is a
///    crossing at that vertex. The first matching region wins for a given
///    vertex; remaining regions are not checked for it.
/// 2. **Segment pass** — a trace segment that intersects a foreign
///    boundary *and* terminates inside that region is a crossing at the
///    intersection point. A segment that merely grazes the boundary and
///    exits again is not.
///
/// At most one finding is emitted per (line, foreign region) pair, so for
/// a given line the `crossed_region` values are pairwise distinct.
/// Findings follow page input order: lines in input order, and within a
/// line, regions in input order.
///
/// Skipped without error: regions with degenerate polygons (never crossing
/// targets, and never valid assignments), lines with traces shorter than 2
/// points, and lines whose assigned region is absent or unknown (crossing
/// is undefined without ground truth).
pub fn find_textline_crossings(
    regions: &[Region],
    textlines: &[TextLine],
) -> Vec<CrossingFinding> {
    let mut crossings = Vec::new();

    // Candidate targets in input order. Membership checks use a set, but
    // all iteration happens over the slice so output order never depends
    // on hash order.
    let candidates: Vec<&Region> = regions
        .iter()
        .filter(|r| !r.polygon.is_degenerate())
        .collect();
    let known_ids: HashSet<&RegionId> = candidates.iter().map(|r| &r.id).collect();

    for line in textlines {
        if line.trace.len() < 2 {
            continue;
        }

        let assigned = match &line.region_id {
            Some(id) if known_ids.contains(id) => id,
            _ => continue,
        };

        // Foreign regions already reported for this line.
        let mut already_crossed: HashSet<&RegionId> = HashSet::new();

        // Vertex pass.
        for point in &line.trace {
            for region in &candidates {
                if region.id == *assigned || already_crossed.contains(&region.id) {
                    continue;
                }

                if point_in_polygon(point, &region.polygon) {
                    crossings.push(CrossingFinding {
                        textline_id: line.id.clone(),
                        assigned_region: assigned.clone(),
                        crossed_region: region.id.clone(),
                        crossing_point: *point,
                        kind: CrossingKind::Vertex,
                    });
                    already_crossed.insert(&region.id);
                    // First matching region wins; move on to the next vertex.
                    break;
                }
            }
        }

        // Segment pass.
        for segment in line.trace.windows(2) {
            let (start, end) = (&segment[0], &segment[1]);

            for region in &candidates {
                if region.id == *assigned || already_crossed.contains(&region.id) {
                    continue;
                }

                let hits = segment_polygon_intersections(start, end, &region.polygon);
                for hit in hits {
                    // Only count it if the segment actually enters the
                    // region, not if it grazes the boundary and exits.
                    if point_in_polygon(end, &region.polygon) {
                        crossings.push(CrossingFinding {
                            textline_id: line.id.clone(),
                            assigned_region: assigned.clone(),
                            crossed_region: region.id.clone(),
                            crossing_point: hit.point,
                            kind: CrossingKind::Segment,
                        });
                        already_crossed.insert(&region.id);
                        break;
                    }
                }
            }
        }
    }

    crossings
}
