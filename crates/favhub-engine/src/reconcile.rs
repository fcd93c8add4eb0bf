use std::collections::{BTreeMap, HashSet};

use favhub_types::User;

/// Annotate each fetched user with favorite membership.
///
/// Builds a set from `favorites` (identity is the user id), then walks
/// `fetched` in its original order. The output always has the same length
/// and order as `fetched`; duplicates are not collapsed here.
pub fn mark_favorites(fetched: &[User], favorites: &[User]) -> Vec<(User, bool)> {
    let favorite_set: HashSet<&User> = favorites.iter().collect();

    fetched
        .iter()
        .map(|user| (user.clone(), favorite_set.contains(user)))
        .collect()
}

/// Group favorites by the uppercased first character of their login.
///
/// Encounter order is preserved within each group; BTreeMap iteration
/// yields the group keys in ascending order, which is the display order.
/// Users with an empty login cannot be grouped and are skipped with a
/// warning rather than silently dropped.
pub fn group_by_initial(favorites: &[User]) -> BTreeMap<String, Vec<User>> {
    let mut groups: BTreeMap<String, Vec<User>> = BTreeMap::new();

    for user in favorites {
        let Some(first) = user.login.chars().next() else {
            log::warn!("skipping favorite with empty login (id {})", user.id);
            continue;
        };

        let key = first.to_uppercase().to_string();
        groups.entry(key).or_default().push(user.clone());
    }

    groups
}
