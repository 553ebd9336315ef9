use smallvec::SmallVec;

use crate::*;

/// The first-move anchor together with its in-bounds neighbors.
pub fn forbidden_zone(anchor: Coordinate, bounds: Bounds) -> SmallVec<[Coordinate; 9]> {
    let mut zone = SmallVec::new();
    zone.push(anchor);
    zone.extend(anchor.neighbors(bounds));
    zone
}

/// Size of the largest forbidden zone any anchor can produce on `bounds`.
pub fn max_forbidden_zone(bounds: Bounds) -> CellCount {
    CellCount::from(bounds.cols().min(3)) * CellCount::from(bounds.rows().min(3))
}

/// Scatters `count` mines over `board`, never inside the forbidden zone around `anchor`.
///
/// Each attempt draws a column in `1..=cols` and then a row in `1..=rows` from `rng`;
/// draws landing in the zone or on an existing mine are discarded. The request is
/// checked up front so the draw loop always has somewhere left to go.
pub fn place_mines(
    board: &mut Board,
    rng: &mut XorShift32,
    anchor: Coordinate,
    count: CellCount,
) -> Result<()> {
    let bounds = board.bounds();
    if !bounds.contains(anchor) {
        return Err(GameError::NotFound);
    }

    let forbidden = forbidden_zone(anchor, bounds);
    let max = bounds.total_cells() - forbidden.len() as CellCount;
    if count > max {
        return Err(GameError::TooManyMines { max });
    }
    if count > 0 && rng.state() == 0 {
        return Err(GameError::ZeroSeed);
    }

    let cols = u32::from(bounds.cols());
    let rows = u32::from(bounds.rows());
    let mut placed: CellCount = 0;
    let mut draws: u64 = 0;

    while placed < count {
        let col = rng.random_in_range(cols)? - 1;
        let row = rng.random_in_range(rows)? - 1;
        draws += 1;

        let Some(coord) = bounds.coordinate_at([col as usize, row as usize]) else {
            continue;
        };
        if forbidden.contains(&coord) {
            log::trace!("draw {} rejected, {} is next to the first move", draws, coord);
            continue;
        }

        let cell = board.get_mut(coord)?;
        if cell.is_mine {
            log::trace!("draw {} rejected, {} already holds a mine", draws, coord);
            continue;
        }
        cell.is_mine = true;
        placed += 1;
    }

    log::debug!(
        "Placed {} mines around first move {} in {} draws",
        placed,
        anchor,
        draws
    );
    Ok(())
}
