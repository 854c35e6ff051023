pub mod common;
pub mod detailed;
pub mod game;
pub mod live;

pub use common::{
    Broadcaster, GameStatus, Odds, PeriodScore, PeriodType, Points, ScorePair, Scores, SeasonInfo,
    Team, Venue, Weather,
};
pub use detailed::{
    AthleteLine, Drive, DriveLog, DrivePlay, NewsItem, PlayTeam, PlayerStatCategory, Predictor,
    ScoringPlay, StandingsEntry, StandingsGroup, StatLine, TeamProjection, TeamStatistics,
    TeamStatsPair, WinProbabilityPoint,
};
pub use game::Game;
pub use live::{GameLeaders, LastPlay, Leader, Possession, Situation, TeamLeaders};
