//! Building the materialized tree from flat listings.
//!
//! The remote API returns folders and sessions as flat, separately-fetched
//! result sets. `build_tree` turns one such snapshot into a nested tree.
//! Items whose declared parent is missing from the snapshot are never
//! dropped: they are reparented to the build root.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use vodbridge_entity::{Folder, Session, TreeNode};

/// Build a nested tree from one flat snapshot, rooted at `root_id`.
///
/// Pure and infallible: missing parents are the defined recovery case, not
/// an error. Each folder and session is attached exactly once. Within a
/// level, subfolders come before sessions and each group is ordered by
/// name (ties broken by id), so identical input yields identical output.
pub fn build_tree(
    folders: HashMap<Uuid, Folder>,
    sessions: HashMap<Uuid, Vec<Session>>,
    root_id: Uuid,
) -> Vec<TreeNode> {
    let known: HashSet<Uuid> = folders.keys().copied().collect();

    // Resolve every folder's effective parent up front, against the full
    // snapshot. Unknown, nil, or self-referential parents reparent to the
    // build root.
    let mut parents: HashMap<Uuid, Uuid> = HashMap::with_capacity(folders.len());
    for folder in folders.values() {
        let parent = match folder.parent_id {
            Some(p) if p == root_id => root_id,
            Some(p) if p != folder.id && known.contains(&p) => p,
            _ => root_id,
        };
        parents.insert(folder.id, parent);
    }

    // Sessions keyed to a folder outside the snapshot (or to no folder at
    // all) are regrouped under the build root.
    let mut groups: HashMap<Uuid, Vec<Session>> = HashMap::new();
    for (folder_id, group) in sessions {
        let key = if folder_id == root_id || known.contains(&folder_id) {
            folder_id
        } else {
            root_id
        };
        groups.entry(key).or_default().extend(group);
    }

    let mut remaining = folders;
    let mut nodes = collect_folders(root_id, &mut remaining, &mut groups, &parents);

    // Folders caught in a parent cycle are reachable from nowhere; attach
    // them (and their subtrees) at root level rather than losing them.
    loop {
        let Some(next) = remaining
            .values()
            .map(|f| (f.name.clone(), f.id))
            .min()
            .map(|(_, id)| id)
        else {
            break;
        };
        let folder = remaining.remove(&next).expect("selected from remaining");
        let children = collect_children(folder.id, &mut remaining, &mut groups, &parents);
        nodes.push(TreeNode::Folder { folder, children });
    }

    nodes.extend(take_sessions(root_id, &mut groups));
    nodes
}

/// Subfolder nodes (with their full subtrees) of `parent_id`, name-ordered.
fn collect_folders(
    parent_id: Uuid,
    remaining: &mut HashMap<Uuid, Folder>,
    groups: &mut HashMap<Uuid, Vec<Session>>,
    parents: &HashMap<Uuid, Uuid>,
) -> Vec<TreeNode> {
    let mut child_ids: Vec<(String, Uuid)> = remaining
        .values()
        .filter(|f| f.id != parent_id && parents[&f.id] == parent_id)
        .map(|f| (f.name.clone(), f.id))
        .collect();
    child_ids.sort();

    let mut nodes = Vec::with_capacity(child_ids.len());
    for (_, id) in child_ids {
        let folder = remaining.remove(&id).expect("each folder visited once");
        let children = collect_children(folder.id, remaining, groups, parents);
        nodes.push(TreeNode::Folder { folder, children });
    }
    nodes
}

/// All children of one folder: subfolders first, then its sessions.
fn collect_children(
    folder_id: Uuid,
    remaining: &mut HashMap<Uuid, Folder>,
    groups: &mut HashMap<Uuid, Vec<Session>>,
    parents: &HashMap<Uuid, Uuid>,
) -> Vec<TreeNode> {
    let mut nodes = collect_folders(folder_id, remaining, groups, parents);
    nodes.extend(take_sessions(folder_id, groups));
    nodes
}

/// Session leaves for one folder, name-ordered, removed from the groups.
fn take_sessions(folder_id: Uuid, groups: &mut HashMap<Uuid, Vec<Session>>) -> Vec<TreeNode> {
    let mut group = groups.remove(&folder_id).unwrap_or_default();
    group.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    group
        .into_iter()
        .map(|session| TreeNode::Session { session })
        .collect()
}
