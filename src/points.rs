//! Achievement points table.
//!
//! Points are a pure function of achievement level and single/group
//! participation. They are computed server side whenever an event is
//! created or updated; client supplied values are never trusted.

use crate::models::events::entities::AchievementLevel;

/// Points awarded for one event.
///
/// Group participation always earns at most the single award for the same
/// level.
pub fn calculate_points(level: AchievementLevel, is_group: bool) -> i32 {
    let (single, group) = match level {
        AchievementLevel::NationalWinner => (30, 27),
        AchievementLevel::NationalParticipation => (25, 23),
        AchievementLevel::StateWinner => (20, 17),
        AchievementLevel::StateParticipation => (15, 13),
        AchievementLevel::DistrictWinners => (12, 11),
        AchievementLevel::DistrictParticipation => (10, 9),
        AchievementLevel::InterschoolEkmDistrictWinners => (8, 7),
        AchievementLevel::InterschoolEkmDistrictParticipation => (5, 4),
        AchievementLevel::MayookhamWinners => (3, 2),
    };
    if is_group { group } else { single }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_points_table() {
        let expected = [
            (AchievementLevel::NationalWinner, 30, 27),
            (AchievementLevel::NationalParticipation, 25, 23),
            (AchievementLevel::StateWinner, 20, 17),
            (AchievementLevel::StateParticipation, 15, 13),
            (AchievementLevel::DistrictWinners, 12, 11),
            (AchievementLevel::DistrictParticipation, 10, 9),
            (AchievementLevel::InterschoolEkmDistrictWinners, 8, 7),
            (AchievementLevel::InterschoolEkmDistrictParticipation, 5, 4),
            (AchievementLevel::MayookhamWinners, 3, 2),
        ];
        for (level, single, group) in expected {
            assert_eq!(calculate_points(level, false), single, "{level} single");
            assert_eq!(calculate_points(level, true), group, "{level} group");
        }
    }

    #[test]
    fn test_group_never_exceeds_single() {
        for level in AchievementLevel::ALL {
            assert!(
                calculate_points(level, true) <= calculate_points(level, false),
                "group points exceed single for {level}"
            );
        }
    }

    #[test]
    fn test_points_are_positive() {
        for level in AchievementLevel::ALL {
            assert!(calculate_points(level, false) > 0);
            assert!(calculate_points(level, true) > 0);
        }
    }
}
