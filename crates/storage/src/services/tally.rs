//! Per-cycle vote aggregation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dto::{
    all_star::{AllStarEntry, AllStarResults},
    match_day::{DayCount, MatchDayResults},
    participation::ParticipationAggregates,
};
use crate::models::{
    AllStarBallot, MatchDay, MatchDayVote, ParticipationChoice, ParticipationStatus, Player,
    player::compare_names,
};

fn latest(timestamps: impl Iterator<Item = DateTime<Utc>>) -> Option<DateTime<Utc>> {
    timestamps.max()
}

pub fn participation_aggregates(
    cycle_key: &str,
    records: &[ParticipationStatus],
) -> ParticipationAggregates {
    let yes = records
        .iter()
        .filter(|record| record.status == ParticipationChoice::Yes)
        .count();

    ParticipationAggregates {
        yes,
        no: records.len() - yes,
        total_responses: records.len(),
        last_updated: latest(records.iter().map(|record| record.submitted_at)),
        cycle_key: cycle_key.to_string(),
    }
}

/// Counts votes for every day of the week.
///
/// The winner is the day with the strictly highest count found scanning
/// Monday to Sunday, so the earliest day wins a tie.
pub fn match_day_results(cycle_key: &str, votes: &[MatchDayVote]) -> MatchDayResults {
    let mut counts = [0usize; 7];
    for vote in votes {
        counts[vote.day.index()] += 1;
    }

    let mut winning_day = None;
    let mut winning_count = 0;
    for day in MatchDay::ALL {
        let count = counts[day.index()];
        if count > winning_count {
            winning_day = Some(day);
            winning_count = count;
        }
    }

    MatchDayResults {
        winning_day,
        day_counts: MatchDay::ALL
            .into_iter()
            .map(|day| DayCount {
                day,
                count: counts[day.index()],
            })
            .collect(),
        total_votes: votes.len(),
        last_updated: latest(votes.iter().map(|vote| vote.submitted_at)),
        cycle_key: cycle_key.to_string(),
    }
}

/// Histogram of picks, most voted first, ties by name.
pub fn all_star_results(cycle_key: &str, ballots: &[AllStarBallot]) -> AllStarResults {
    let mut histogram: HashMap<i32, AllStarEntry> = HashMap::new();

    for pick in ballots.iter().flat_map(|ballot| ballot.picks.0.iter()) {
        histogram
            .entry(pick.id)
            .or_insert_with(|| AllStarEntry {
                player: Player::new(pick.id, pick.name.clone()),
                votes: 0,
            })
            .votes += 1;
    }

    let mut histogram: Vec<AllStarEntry> = histogram.into_values().collect();
    histogram.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then_with(|| compare_names(&a.player.name, &b.player.name))
            .then_with(|| a.player.id.cmp(&b.player.id))
    });

    AllStarResults {
        histogram,
        total_ballots: ballots.len(),
        last_updated: latest(ballots.iter().map(|ballot| ballot.submitted_at)),
        cycle_key: cycle_key.to_string(),
    }
}
