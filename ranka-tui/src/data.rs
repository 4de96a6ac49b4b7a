use ranka_types::Profile;

/// The fixed seed list the store is built from at startup.
///
/// Twenty well-known accounts with metrics frozen at plausible values.
/// Brand accounts carry no view data for their latest post, which keeps the
/// "views absent" path exercised from first render.
pub fn seed_profiles() -> Vec<Profile> {
    fn profile(
        username: &str,
        display_name: &str,
        followers: i64,
        following: i64,
        posts: i64,
        latest_post_likes: i64,
        latest_post_views: Option<i64>,
    ) -> Profile {
        Profile {
            username: username.to_string(),
            display_name: display_name.to_string(),
            followers,
            following,
            posts,
            latest_post_likes,
            latest_post_views,
        }
    }

    vec![
        profile("instagram", "Instagram", 672_000_000, 88, 7_821, 1_250_000, None),
        profile("cristiano", "Cristiano Ronaldo", 639_000_000, 590, 3_780, 8_400_000, Some(95_000_000)),
        profile("leomessi", "Leo Messi", 504_000_000, 310, 1_295, 6_100_000, Some(72_000_000)),
        profile("selenagomez", "Selena Gomez", 427_000_000, 272, 2_043, 3_900_000, Some(41_000_000)),
        profile("kyliejenner", "Kylie Jenner", 398_000_000, 112, 7_412, 2_800_000, Some(35_000_000)),
        profile("therock", "Dwayne Johnson", 395_000_000, 780, 8_011, 1_700_000, Some(22_000_000)),
        profile("arianagrande", "Ariana Grande", 377_000_000, 680, 5_162, 4_300_000, Some(47_000_000)),
        profile("kimkardashian", "Kim Kardashian", 363_000_000, 256, 6_204, 2_100_000, Some(28_000_000)),
        profile("beyonce", "Beyoncé", 312_000_000, 0, 2_387, 3_200_000, Some(31_000_000)),
        profile("khloekardashian", "Khloé Kardashian", 304_000_000, 148, 4_519, 1_400_000, Some(17_000_000)),
        profile("nike", "Nike", 302_000_000, 152, 1_327, 480_000, None),
        profile("justinbieber", "Justin Bieber", 292_000_000, 1_033, 7_604, 2_600_000, Some(29_000_000)),
        profile("kendalljenner", "Kendall Jenner", 288_000_000, 224, 1_118, 2_300_000, Some(25_000_000)),
        profile("taylorswift", "Taylor Swift", 283_000_000, 0, 692, 5_800_000, Some(63_000_000)),
        profile("natgeo", "National Geographic", 279_000_000, 138, 29_452, 310_000, None),
        profile("virat.kohli", "Virat Kohli", 271_000_000, 268, 1_024, 4_900_000, Some(52_000_000)),
        profile("jlo", "Jennifer Lopez", 249_000_000, 1_410, 3_877, 1_100_000, Some(14_000_000)),
        profile("nickiminaj", "Nicki Minaj", 223_000_000, 1_252, 6_480, 1_900_000, Some(19_000_000)),
        profile("kourtneykardash", "Kourtney Kardashian", 218_000_000, 130, 4_998, 980_000, Some(12_000_000)),
        profile("neymarjr", "Neymar Jr", 217_000_000, 1_620, 5_433, 3_100_000, Some(38_000_000)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_usernames_are_unique() {
        let profiles = seed_profiles();
        let usernames: HashSet<&str> = profiles.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(usernames.len(), profiles.len());
    }

    #[test]
    fn seed_metrics_start_non_negative() {
        for profile in seed_profiles() {
            assert!(profile.followers >= 0, "{}", profile.username);
            assert!(profile.following >= 0, "{}", profile.username);
            assert!(profile.posts >= 0, "{}", profile.username);
            assert!(profile.latest_post_likes >= 0, "{}", profile.username);
            if let Some(views) = profile.latest_post_views {
                assert!(views >= 0, "{}", profile.username);
            }
        }
    }

    #[test]
    fn seed_covers_both_view_states() {
        let profiles = seed_profiles();
        assert!(profiles.iter().any(|p| p.latest_post_views.is_some()));
        assert!(profiles.iter().any(|p| p.latest_post_views.is_none()));
    }
}
