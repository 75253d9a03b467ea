use crate::domain::model::{Board, BoardSet, FREE_SPACE, PHRASES_PER_BOARD};
use crate::utils::error::{BingoError, Result};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Generate one board from the catalog using the thread-local RNG.
pub fn generate_board(catalog: &[&str]) -> Result<Board> {
    generate_board_with_rng(catalog, &mut rand::rng())
}

/// Generate one board, drawing randomness from the caller's RNG.
///
/// Picks 24 distinct phrases without replacement, shuffles them, and lays
/// them out around the center free space. `choose_multiple` clamps to the
/// slice length instead of failing, so the size check has to come first.
pub fn generate_board_with_rng<R: Rng + ?Sized>(catalog: &[&str], rng: &mut R) -> Result<Board> {
    if catalog.len() < PHRASES_PER_BOARD {
        return Err(BingoError::CatalogTooSmall {
            available: catalog.len(),
            required: PHRASES_PER_BOARD,
        });
    }

    let mut picks: Vec<&str> = catalog
        .choose_multiple(rng, PHRASES_PER_BOARD)
        .copied()
        .collect();
    picks.shuffle(rng);

    let half = PHRASES_PER_BOARD / 2;
    let mut cells: Vec<String> = Vec::with_capacity(PHRASES_PER_BOARD + 1);
    cells.extend(picks[..half].iter().map(|s| s.to_string()));
    cells.push(FREE_SPACE.to_string());
    cells.extend(picks[half..].iter().map(|s| s.to_string()));

    Ok(Board::from_cells(cells))
}

/// Generate `count` independent boards. Boards may repeat phrases across
/// (but never within) boards.
pub fn generate_board_set(catalog: &[&str], count: u32) -> Result<BoardSet> {
    let mut rng = rand::rng();
    generate_board_set_with_rng(catalog, count, &mut rng)
}

pub fn generate_board_set_with_rng<R: Rng + ?Sized>(
    catalog: &[&str],
    count: u32,
    rng: &mut R,
) -> Result<BoardSet> {
    let boards = (0..count)
        .map(|_| generate_board_with_rng(catalog, rng))
        .collect::<Result<Vec<Board>>>()?;
    Ok(BoardSet::new(boards))
}
