//! Head-to-head pairing of per-team matchup records.

use crate::sleeper::types::SleeperMatchup;

/// Two records sharing a matchup id. The first one seen is the home side.
#[derive(Debug, Clone, Copy)]
pub struct PairedRecords<'a> {
    pub matchup_id: u32,
    pub home: &'a SleeperMatchup,
    pub away: &'a SleeperMatchup,
}

/// Group records by `matchup_id` in first-appearance order and keep only
/// groups of exactly two.
///
/// Records without a matchup id (byes) are skipped. Any other group size is
/// an API anomaly: it is logged and dropped, never an error, since partial
/// weeks are normal.
pub fn pair_matchups(records: &[SleeperMatchup]) -> Vec<PairedRecords<'_>> {
    let mut groups: Vec<(u32, Vec<&SleeperMatchup>)> = Vec::new();

    for record in records {
        let Some(id) = record.matchup_id else {
            tracing::debug!(roster_id = %record.roster_id, "record has no matchup id, skipping");
            continue;
        };
        match groups.iter_mut().find(|(gid, _)| *gid == id) {
            Some((_, members)) => members.push(record),
            None => groups.push((id, vec![record])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(matchup_id, members)| match members.as_slice() {
            [home, away] => Some(PairedRecords {
                matchup_id,
                home: *home,
                away: *away,
            }),
            _ => {
                tracing::warn!(
                    matchup_id,
                    size = members.len(),
                    "dropping matchup group that is not a head-to-head pair"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::RosterId;

    fn record(matchup_id: Option<u32>, roster_id: u32, points: f64) -> SleeperMatchup {
        SleeperMatchup {
            matchup_id,
            roster_id: RosterId::new(roster_id),
            points: Some(points),
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_in_first_appearance_order() {
        let records = vec![
            record(Some(2), 1, 100.0),
            record(Some(1), 2, 90.0),
            record(Some(2), 3, 80.0),
            record(Some(1), 4, 70.0),
        ];

        let pairs = pair_matchups(&records);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].matchup_id, 2);
        assert_eq!(pairs[0].home.roster_id, RosterId::new(1));
        assert_eq!(pairs[0].away.roster_id, RosterId::new(3));
        assert_eq!(pairs[1].matchup_id, 1);
        assert_eq!(pairs[1].home.roster_id, RosterId::new(2));
    }

    #[test]
    fn test_three_member_group_dropped() {
        let records = vec![
            record(Some(1), 1, 100.0),
            record(Some(1), 2, 90.0),
            record(Some(1), 3, 80.0),
            record(Some(2), 4, 70.0),
            record(Some(2), 5, 60.0),
        ];

        let pairs = pair_matchups(&records);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].matchup_id, 2);
    }

    #[test]
    fn test_singleton_and_byes_dropped() {
        let records = vec![
            record(Some(1), 1, 100.0),
            record(None, 2, 0.0),
            record(None, 3, 0.0),
        ];
        assert!(pair_matchups(&records).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(pair_matchups(&[]).is_empty());
    }
}
