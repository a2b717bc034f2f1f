use crate::model::{CalendarDate, ToCalendarDate};
use std::iter::FusedIterator;

/// Itérateur jour par jour sur `[start, end]` (vide si `start > end`).
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl DateIter {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) => {
                let remaining = (self.end - next).num_days() as usize + 1;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DateIter {}
impl FusedIterator for DateIter {}

/// Toutes les dates de `start` à `end` incluses, dans l'ordre croissant.
pub fn enumerate_dates<S, E>(start: S, end: E) -> Vec<CalendarDate>
where
    S: ToCalendarDate,
    E: ToCalendarDate,
{
    DateIter::new(start.to_calendar_date(), end.to_calendar_date()).collect()
}
