//! Aggregated results over many duels.

use combat_core::ActorId;
use tracing::info;

use crate::duel::{DuelOutcome, Ending};

/// Per-fighter counters, keyed by the two roster entries of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FighterTally {
    pub wins: u32,
    pub flights: u32,
    pub fumbles: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    fighters: [(ActorId, FighterTally); 2],
    pub duels: u32,
    pub stalemates: u32,
    pub mutual_kills: u32,
    pub total_rounds: u64,
    pub refusals: u32,
    pub improvements: u32,
}

impl Tally {
    pub fn new(ids: [ActorId; 2]) -> Self {
        Self {
            fighters: ids.map(|id| (id, FighterTally::default())),
            duels: 0,
            stalemates: 0,
            mutual_kills: 0,
            total_rounds: 0,
            refusals: 0,
            improvements: 0,
        }
    }

    pub fn record(&mut self, outcome: &DuelOutcome) {
        self.duels += 1;
        self.total_rounds += u64::from(outcome.rounds);
        self.refusals += outcome.refusals;
        self.improvements += outcome.improvements;

        match outcome.ending {
            Ending::Slain { winner } => {
                if let Some(entry) = self.entry(winner) {
                    entry.wins += 1;
                }
            }
            Ending::Fled { actor } => {
                if let Some(entry) = self.entry(actor) {
                    entry.flights += 1;
                }
            }
            Ending::Mutual => self.mutual_kills += 1,
            Ending::RoundCap => self.stalemates += 1,
        }

        for (id, fumbles) in outcome.fumbles {
            if let Some(entry) = self.entry(id) {
                entry.fumbles += fumbles;
            }
        }
    }

    pub fn get(&self, id: ActorId) -> Option<&FighterTally> {
        self.fighters
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, tally)| tally)
    }

    pub fn average_rounds(&self) -> f64 {
        if self.duels == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.duels)
        }
    }

    pub fn report(&self, left: &str, right: &str) {
        let [(_, l), (_, r)] = self.fighters;
        info!(
            fighter = left,
            wins = l.wins,
            fled = l.flights,
            fumbles = l.fumbles,
            "result"
        );
        info!(
            fighter = right,
            wins = r.wins,
            fled = r.flights,
            fumbles = r.fumbles,
            "result"
        );
        info!(
            duels = self.duels,
            stalemates = self.stalemates,
            mutual = self.mutual_kills,
            average_rounds = %format!("{:.2}", self.average_rounds()),
            refusals = self.refusals,
            improvements = self.improvements,
            "summary"
        );
    }

    fn entry(&mut self, id: ActorId) -> Option<&mut FighterTally> {
        self.fighters
            .iter_mut()
            .find(|(known, _)| *known == id)
            .map(|(_, tally)| tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ending: Ending, rounds: u32, fumbles: [(ActorId, u32); 2]) -> DuelOutcome {
        DuelOutcome {
            ending,
            rounds,
            fumbles,
            refusals: 1,
            improvements: 0,
        }
    }

    #[test]
    fn counts_endings_regardless_of_opening_side() {
        let (orc, wolf) = (ActorId(1), ActorId(2));
        let mut tally = Tally::new([orc, wolf]);

        tally.record(&outcome(Ending::Slain { winner: orc }, 4, [(orc, 1), (wolf, 0)]));
        tally.record(&outcome(Ending::Slain { winner: orc }, 6, [(wolf, 2), (orc, 0)]));
        tally.record(&outcome(Ending::Fled { actor: wolf }, 3, [(orc, 0), (wolf, 0)]));
        tally.record(&outcome(Ending::RoundCap, 50, [(wolf, 0), (orc, 1)]));

        let orc_tally = tally.get(orc).unwrap();
        assert_eq!(orc_tally.wins, 2);
        assert_eq!(orc_tally.fumbles, 2);

        let wolf_tally = tally.get(wolf).unwrap();
        assert_eq!(wolf_tally.flights, 1);
        assert_eq!(wolf_tally.fumbles, 2);

        assert_eq!(tally.stalemates, 1);
        assert_eq!(tally.refusals, 4);
        assert_eq!(tally.average_rounds(), 15.75);
    }

    #[test]
    fn empty_tally_averages_zero() {
        assert_eq!(Tally::new([ActorId(1), ActorId(2)]).average_rounds(), 0.0);
    }
}
