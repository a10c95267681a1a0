/// Heuristic depth-first search with replayed backtracking
pub mod dfs;
/// Comparator-driven binary min-heap
pub mod heap;
/// Randomized spanning-tree maze carving
pub mod maze;
/// Move-queue replay engine and presentation seams
pub mod replay;
/// Random obstacle scattering
pub mod scatter;
/// Moves, heuristic and strategy selection shared by both searches
pub mod search;
/// Arena ownership: grid, pacing and per-run replays
pub mod session;
/// Priority-queue shortest-path search
pub mod shortest;
