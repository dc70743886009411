//! Car x track usage matrix builder.
//!
//! Two explicit passes: first accumulate cell values and marginal sums
//! into first-seen index order, then compute a descending-by-marginal
//! permutation for each axis and materialize a fresh reordered matrix.
//! The reorder cannot happen earlier because marginal sums are only known
//! once every session has been scanned, and building a new matrix avoids
//! the index-aliasing traps of reordering in place.

use std::collections::HashMap;

use crate::model::{LookupError, ReferenceData, Session};

/// A dense usage matrix plus its axis labels, ready for the heatmap
/// renderer. `matrix[x][y]` is the accumulated session time for car `x`
/// on track `y`; `None` means the combination never occurred.
#[derive(Clone, Debug, Default)]
pub struct UsageMatrix {
    pub matrix: Vec<Vec<Option<f64>>>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

/// Assigns each distinct key a stable index in first-seen order.
struct IndexMapping {
    indices: HashMap<i32, usize>,
    labels: Vec<String>,
}

impl IndexMapping {
    fn build<K, L>(sessions: &[Session], key_of: K, label_of: L) -> Result<Self, LookupError>
    where
        K: Fn(&Session) -> i32,
        L: Fn(&Session) -> Result<String, LookupError>,
    {
        let mut indices = HashMap::new();
        let mut labels = Vec::new();
        for session in sessions {
            let key = key_of(session);
            if indices.contains_key(&key) {
                continue;
            }
            indices.insert(key, labels.len());
            labels.push(label_of(session)?);
        }
        Ok(Self { indices, labels })
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn index(&self, key: i32) -> usize {
        // Every key was inserted during the build pass
        self.indices[&key]
    }
}

/// Indices `0..sums.len()` ordered by descending sum (stable on ties).
fn sort_permutation(sums: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sums.len()).collect();
    order.sort_by(|&lhs, &rhs| sums[rhs].total_cmp(&sums[lhs]));
    order
}

fn permute_labels(labels: &[String], order: &[usize]) -> Vec<String> {
    order.iter().map(|&i| labels[i].clone()).collect()
}

/// Build the car x track usage matrix for a driver's sessions.
///
/// Cars index the x axis (keyed by `car_id`), track configurations the y
/// axis (keyed by `package_id`, labeled by the track's display name).
/// Cell values accumulate `average_lap * laps_complete`. Both axes come
/// back sorted by descending total time.
pub fn build_usage_matrix(
    sessions: &[Session],
    refdata: &ReferenceData,
) -> Result<UsageMatrix, LookupError> {
    let cars = IndexMapping::build(
        sessions,
        |s| s.car_id,
        |s| Ok(refdata.car(s.car_id)?.car_name.clone()),
    )?;
    let tracks = IndexMapping::build(
        sessions,
        |s| s.package_id,
        |s| Ok(refdata.track(s.track_id)?.track_name.clone()),
    )?;

    let width = cars.len();
    let height = tracks.len();

    let mut matrix: Vec<Vec<Option<f64>>> = vec![vec![None; height]; width];
    let mut x_sums = vec![0.0_f64; width];
    let mut y_sums = vec![0.0_f64; height];

    for session in sessions {
        let x = cars.index(session.car_id);
        let y = tracks.index(session.package_id);
        let value = session.time_in_session() as f64;

        x_sums[x] += value;
        y_sums[y] += value;
        *matrix[x][y].get_or_insert(0.0) += value;
    }

    let x_order = sort_permutation(&x_sums);
    let y_order = sort_permutation(&y_sums);

    let sorted_matrix = x_order
        .iter()
        .map(|&x| y_order.iter().map(|&y| matrix[x][y]).collect())
        .collect();

    Ok(UsageMatrix {
        matrix: sorted_matrix,
        x_labels: permute_labels(&cars.labels, &x_order),
        y_labels: permute_labels(&tracks.labels, &y_order),
    })
}
