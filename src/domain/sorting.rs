use crate::domain::{
    column::{Column, ColumnOrder},
    project::Project,
};
use std::cmp::Ordering;

/// Sorts the projects of one column into board order
///
/// Explicit positions come first, ascending. Projects without a position
/// follow, highest priority first. The sort is stable, so remaining ties
/// keep the order the server returned them in.
///
/// # Examples
/// ```
/// use project_board::domain::sorting::sort_column;
/// use project_board::domain::{Project, ProjectId};
///
/// let mut projects = vec![
///     Project::new(ProjectId::new(1), "a").with_priority(1),
///     Project::new(ProjectId::new(2), "b").with_position(0),
///     Project::new(ProjectId::new(3), "c").with_priority(5),
/// ];
///
/// sort_column(&mut projects);
/// let ids: Vec<_> = projects.iter().map(|p| p.id.get()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// ```
pub fn sort_column(projects: &mut [Project]) {
    projects.sort_by(compare_board_order);
}

/// Board ordering between two projects of the same column
///
/// Priority only ranks projects that both lack a position.
pub fn compare_board_order(a: &Project, b: &Project) -> Ordering {
    match (a.position, b.position) {
        (None, None) => b.priority.cmp(&a.priority),
        (a_pos, b_pos) => compare_option_positions(a_pos, b_pos),
    }
}

/// Compare optional positions with None always sorting to the end
fn compare_option_positions(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a_pos), Some(b_pos)) => a_pos.cmp(&b_pos),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Groups projects by column, each column in board order
pub fn group_by_column(projects: &[Project]) -> Vec<(Column, Vec<&Project>)> {
    Column::ALL
        .iter()
        .map(|column| {
            let mut members: Vec<&Project> =
                projects.iter().filter(|p| p.column() == *column).collect();
            members.sort_by(|a, b| compare_board_order(a, b));
            (*column, members)
        })
        .collect()
}

/// Current layout of the board as ids per column
pub fn column_order(projects: &[Project]) -> ColumnOrder {
    let mut order = ColumnOrder::new();
    for (column, members) in group_by_column(projects) {
        order
            .column_mut(column)
            .extend(members.iter().map(|p| p.id));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectId;

    fn ids(projects: &[&Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_sort_by_position_ascending() {
        let mut projects = vec![
            Project::new(ProjectId::new(1), "a").with_position(2),
            Project::new(ProjectId::new(2), "b").with_position(0),
            Project::new(ProjectId::new(3), "c").with_position(1),
        ];

        sort_column(&mut projects);

        let sorted: Vec<_> = projects.iter().map(|p| p.id.get()).collect();
        assert_eq!(sorted, vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_fallback_descending() {
        let mut projects = vec![
            Project::new(ProjectId::new(1), "low").with_priority(1),
            Project::new(ProjectId::new(2), "high").with_priority(9),
            Project::new(ProjectId::new(3), "mid").with_priority(4),
        ];

        sort_column(&mut projects);

        let sorted: Vec<_> = projects.iter().map(|p| p.id.get()).collect();
        assert_eq!(sorted, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let mut projects = vec![
            Project::new(ProjectId::new(5), "e"),
            Project::new(ProjectId::new(4), "d"),
            Project::new(ProjectId::new(6), "f"),
        ];

        sort_column(&mut projects);

        let sorted: Vec<_> = projects.iter().map(|p| p.id.get()).collect();
        assert_eq!(sorted, vec![5, 4, 6]);
    }

    #[test]
    fn test_equal_positions_ignore_priority() {
        let mut projects = vec![
            Project::new(ProjectId::new(1), "a").with_position(0).with_priority(1),
            Project::new(ProjectId::new(2), "b").with_position(0).with_priority(9),
            Project::new(ProjectId::new(3), "c").with_priority(20),
        ];

        sort_column(&mut projects);

        let sorted: Vec<_> = projects.iter().map(|p| p.id.get()).collect();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_compare_option_positions() {
        assert_eq!(compare_option_positions(Some(1), Some(2)), Ordering::Less);
        assert_eq!(compare_option_positions(Some(9), None), Ordering::Less);
        assert_eq!(compare_option_positions(None, Some(0)), Ordering::Greater);
        assert_eq!(compare_option_positions(None, None), Ordering::Equal);
    }

    #[test]
    fn test_group_by_column_normalizes_status() {
        let projects = vec![
            Project::new(ProjectId::new(1), "a").with_status("Done"),
            Project::new(ProjectId::new(2), "b").with_status("in_progress"),
            Project::new(ProjectId::new(3), "c").with_status("foobar"),
            Project::new(ProjectId::new(4), "d").with_status("archived"),
        ];

        let groups = group_by_column(&projects);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, Column::Abandoned);
        assert_eq!(ids(&groups[0].1), vec![4]);
        assert_eq!(ids(&groups[1].1), vec![3]);
        assert_eq!(ids(&groups[2].1), vec![2]);
        assert_eq!(ids(&groups[3].1), vec![1]);
    }

    #[test]
    fn test_column_order_places_every_project_once() {
        let projects = vec![
            Project::new(ProjectId::new(1), "a").with_status("active").with_position(1),
            Project::new(ProjectId::new(2), "b").with_status("active").with_position(0),
            Project::new(ProjectId::new(3), "c"),
        ];

        let order = column_order(&projects);

        assert_eq!(order.len(), 3);
        assert_eq!(order.column(Column::Active), &[ProjectId::new(2), ProjectId::new(1)]);
        assert_eq!(order.column(Column::Backlog), &[ProjectId::new(3)]);
        assert!(order.column(Column::Completed).is_empty());
    }
}
