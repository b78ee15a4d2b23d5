//! Todo list projections: filter, sort, counts.
//!
//! # Responsibility
//! - Derive display-ordered views of the todo list without mutating it.
//! - Compare titles the way a human reader would: case-insensitive,
//!   diacritic-folding, with embedded numbers compared by value.
//!
//! # Invariants
//! - `project` never changes the underlying list or the output of `counts`.
//! - Sorts are deterministic: equal keys fall back to allocation `order`.

use crate::model::todo::{Todo, TodoCounts, TodoFilter, TodoSort, TodoStatus};
use std::cmp::Ordering;
use std::iter::Peekable;

/// Filters then sorts a snapshot of the list. Pure.
pub fn project(todos: &[Todo], filter: TodoFilter, sort: TodoSort) -> Vec<Todo> {
    sort_todos(filter_todos(todos, filter), sort)
}

/// Keeps only todos matching `filter`, preserving list order.
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    let wanted = match filter {
        TodoFilter::All => return todos.to_vec(),
        TodoFilter::Pending => TodoStatus::Pending,
        TodoFilter::InProgress => TodoStatus::InProgress,
        TodoFilter::Completed => TodoStatus::Completed,
    };
    todos
        .iter()
        .filter(|todo| todo.status == wanted)
        .cloned()
        .collect()
}

/// Sorts an owned list by the requested key, tie-breaking on `order`.
pub fn sort_todos(mut todos: Vec<Todo>, sort: TodoSort) -> Vec<Todo> {
    match sort {
        TodoSort::Newest => todos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.order.cmp(&a.order))
        }),
        TodoSort::Oldest => todos.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.order.cmp(&b.order))
        }),
        TodoSort::Alphabetical => todos.sort_by(|a, b| {
            natural_cmp(&a.text, &b.text).then_with(|| a.order.cmp(&b.order))
        }),
        TodoSort::ReverseAlphabetical => todos.sort_by(|a, b| {
            natural_cmp(&b.text, &a.text).then_with(|| a.order.cmp(&b.order))
        }),
    }
    todos
}

/// Tallies todos per status. Always consistent with the full list.
pub fn counts(todos: &[Todo]) -> TodoCounts {
    let mut tally = TodoCounts {
        all: todos.len(),
        ..TodoCounts::default()
    };
    for todo in todos {
        match todo.status {
            TodoStatus::Pending => tally.pending += 1,
            TodoStatus::InProgress => tally.in_progress += 1,
            TodoStatus::Completed => tally.completed += 1,
        }
    }
    tally
}

/// Human-style string comparison.
///
/// Lowercases, folds Latin/Vietnamese diacritics to their base letter, and
/// compares runs of ASCII digits by numeric value so `item 2` sorts before
/// `item 10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = folded(a).peekable();
    let mut right = folded(b).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    match cmp_digit_runs(&mut left, &mut right) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    }
                }
                match x.cmp(&y) {
                    Ordering::Equal => {
                        left.next();
                        right.next();
                    }
                    decided => return decided,
                }
            }
        }
    }
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase).map(fold_char)
}

fn cmp_digit_runs<I>(left: &mut Peekable<I>, right: &mut Peekable<I>) -> Ordering
where
    I: Iterator<Item = char>,
{
    let a = take_digits(left);
    let b = take_digits(right);
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

fn take_digits<I>(chars: &mut Peekable<I>) -> String
where
    I: Iterator<Item = char>,
{
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(*c);
        chars.next();
    }
    run
}

/// Maps accented Latin letters (including the Vietnamese set) to their
/// base letter. Characters outside the table pass through unchanged.
fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' | 'ë' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' | 'ö' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'û' | 'ü' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
