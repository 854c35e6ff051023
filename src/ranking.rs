//! Ordering of games and selection of the featured game.
//!
//! Games are grouped by status: in progress first, then final, then
//! scheduled. The featured game is drawn at random from the first
//! non-empty group of in-progress and final games, so repeated runs rotate
//! through simultaneous games. Scheduled games are ordered by kickoff.
//! Games with an unknown status go last, in input order.

use crate::data_fetcher::models::{Game, GameStatus};
use crate::data_fetcher::processors::parse_upstream_utc;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Chooses the featured game among `len` equally ranked candidates.
pub trait FeaturedPicker {
    /// Index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random pick over any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<SmallRng> {
    /// Picker seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> FeaturedPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }
}

/// Moves a picked game to the front of `group`.
fn promote_featured(group: &mut Vec<Game>, picker: &mut impl FeaturedPicker) {
    if group.is_empty() {
        return;
    }
    let index = picker.pick(group.len()).min(group.len() - 1);
    let featured = group.remove(index);
    info!("Featured game: {} ({})", featured.matchup(), featured.status);
    group.insert(0, featured);
}

/// Orders `games` for display and assigns 1-based `display_rank`s.
///
/// Only the rank 1 game is meant to be enriched.
pub fn rank_games(games: Vec<Game>, picker: &mut impl FeaturedPicker) -> Vec<Game> {
    let mut in_progress = Vec::new();
    let mut finals = Vec::new();
    let mut scheduled = Vec::new();
    let mut unknown = Vec::new();

    for game in games {
        match game.status {
            GameStatus::InProgress => in_progress.push(game),
            GameStatus::Final => finals.push(game),
            GameStatus::Scheduled => scheduled.push(game),
            GameStatus::Unknown => unknown.push(game),
        }
    }

    if !in_progress.is_empty() {
        promote_featured(&mut in_progress, picker);
    } else {
        promote_featured(&mut finals, picker);
    }

    // Unparseable start times sort after every parseable one
    scheduled.sort_by_cached_key(|game| {
        let start = parse_upstream_utc(&game.start_time_utc).ok();
        (start.is_none(), start)
    });

    let mut ranked: Vec<Game> = in_progress
        .into_iter()
        .chain(finals)
        .chain(scheduled)
        .chain(unknown)
        .collect();

    for (index, game) in ranked.iter_mut().enumerate() {
        game.display_rank = index as u32 + 1;
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the same position, clamped to the group.
    struct FixedPicker(usize);

    impl FeaturedPicker for FixedPicker {
        fn pick(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn game(id: &str, status: GameStatus, start: &str) -> Game {
        Game {
            id: id.to_string(),
            status,
            start_time_utc: start.to_string(),
            ..Game::default()
        }
    }

    fn ids(games: &[Game]) -> Vec<&str> {
        games.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn test_tier_order_and_ranks() {
        let games = vec![
            game("s1", GameStatus::Scheduled, "2024-11-17T21:25Z"),
            game("u1", GameStatus::Unknown, ""),
            game("f1", GameStatus::Final, "2024-11-17T18:00Z"),
            game("i1", GameStatus::InProgress, "2024-11-17T18:00Z"),
            game("s2", GameStatus::Scheduled, "2024-11-17T18:00Z"),
        ];
        let ranked = rank_games(games, &mut FixedPicker(0));

        assert_eq!(ids(&ranked), vec!["i1", "f1", "s2", "s1", "u1"]);
        let ranks: Vec<u32> = ranked.iter().map(|g| g.display_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_featured_moves_to_front_of_live_group() {
        let games = vec![
            game("i1", GameStatus::InProgress, ""),
            game("i2", GameStatus::InProgress, ""),
            game("i3", GameStatus::InProgress, ""),
        ];
        let ranked = rank_games(games, &mut FixedPicker(2));
        assert_eq!(ids(&ranked), vec!["i3", "i1", "i2"]);
    }

    #[test]
    fn test_featured_from_finals_when_nothing_is_live() {
        let games = vec![
            game("s1", GameStatus::Scheduled, "2024-11-17T18:00Z"),
            game("f1", GameStatus::Final, ""),
            game("f2", GameStatus::Final, ""),
        ];
        let ranked = rank_games(games, &mut FixedPicker(1));
        assert_eq!(ids(&ranked), vec!["f2", "f1", "s1"]);
    }

    #[test]
    fn test_scheduled_only_sorted_by_start_with_unparseable_last() {
        let games = vec![
            game("late", GameStatus::Scheduled, "2024-11-18T01:20Z"),
            game("tbd", GameStatus::Scheduled, "TBD"),
            game("early", GameStatus::Scheduled, "2024-11-17T18:00Z"),
            game("tbd2", GameStatus::Scheduled, ""),
        ];
        let ranked = rank_games(games, &mut FixedPicker(0));
        assert_eq!(ids(&ranked), vec!["early", "late", "tbd", "tbd2"]);
        assert_eq!(ranked[0].display_rank, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_games(Vec::new(), &mut FixedPicker(0)).is_empty());
    }

    #[test]
    fn test_ranks_are_a_permutation_with_single_first() {
        let statuses = [
            GameStatus::Final,
            GameStatus::Unknown,
            GameStatus::InProgress,
            GameStatus::Scheduled,
            GameStatus::InProgress,
            GameStatus::Final,
            GameStatus::Unknown,
        ];
        let games: Vec<Game> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| game(&i.to_string(), *status, "2024-11-17T18:00Z"))
            .collect();

        let mut picker = RandomPicker::new(SmallRng::seed_from_u64(7));
        let ranked = rank_games(games, &mut picker);

        let mut ranks: Vec<u32> = ranked.iter().map(|g| g.display_rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=statuses.len() as u32).collect::<Vec<_>>());
        assert_eq!(ranked.iter().filter(|g| g.display_rank == 1).count(), 1);
        assert_eq!(ranked[0].status, GameStatus::InProgress);
    }

    #[test]
    fn test_random_pick_is_uniform() {
        let mut picker = RandomPicker::new(SmallRng::seed_from_u64(42));
        let mut counts = [0usize; 3];
        let trials = 3000;

        for _ in 0..trials {
            let games = vec![
                game("0", GameStatus::InProgress, ""),
                game("1", GameStatus::InProgress, ""),
                game("2", GameStatus::InProgress, ""),
            ];
            let ranked = rank_games(games, &mut picker);
            let featured: usize = ranked[0].id.parse().unwrap();
            counts[featured] += 1;
        }

        for count in counts {
            assert!(
                (800..=1200).contains(&count),
                "featured pick is skewed: {counts:?}"
            );
        }
    }

    #[test]
    fn test_random_picker_single_candidate() {
        let mut picker = RandomPicker::from_os_rng();
        assert_eq!(picker.pick(1), 0);
        assert!(picker.pick(5) < 5);
    }
}
