use chrono::NaiveDate;

use super::month_grid::{DateBounds, MonthGrid, YearMonth};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PopoverState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug)]
pub enum DatePickerAction {
    /// Open on the selected date's month, or the last selectable month
    Open { selected: Option<NaiveDate> },
    Close,
    PreviousMonth,
    NextMonth,
    /// Month dropdown (1-based); the selection is left untouched
    JumpToMonth(u32),
    /// Year dropdown; the selection is left untouched
    JumpToYear(i32),
}

#[derive(Clone, PartialEq, Debug)]
pub struct DatePickerState {
    pub popover: PopoverState,
    pub visible_month: YearMonth,
    pub bounds: DateBounds,
}

impl DatePickerState {
    pub fn new(bounds: DateBounds) -> Self {
        Self {
            popover: PopoverState::Closed,
            visible_month: bounds.last_month(),
            bounds,
        }
    }

    pub fn is_open(&self) -> bool {
        self.popover == PopoverState::Open
    }

    pub fn can_go_previous(&self) -> bool {
        self.visible_month > self.bounds.first_month()
    }

    pub fn can_go_next(&self) -> bool {
        self.visible_month < self.bounds.last_month()
    }

    pub fn reduce_in_place(&mut self, action: DatePickerAction) {
        match action {
            DatePickerAction::Open { selected } => {
                let month = selected
                    .map(YearMonth::of)
                    .unwrap_or_else(|| self.bounds.last_month());
                self.visible_month = self.bounds.clamp_month(month);
                self.popover = PopoverState::Open;
            }
            DatePickerAction::Close => {
                self.popover = PopoverState::Closed;
            }
            DatePickerAction::PreviousMonth => {
                if self.can_go_previous() {
                    self.visible_month = self.visible_month.add_months(-1);
                }
            }
            DatePickerAction::NextMonth => {
                if self.can_go_next() {
                    self.visible_month = self.visible_month.add_months(1);
                }
            }
            DatePickerAction::JumpToMonth(month) => {
                if let Some(target) = self.visible_month.with_month(month) {
                    self.visible_month = self.bounds.clamp_month(target);
                }
            }
            DatePickerAction::JumpToYear(year) => {
                let target = self.visible_month.with_year(year);
                self.visible_month = self.bounds.clamp_month(target);
            }
        }
    }

    /// Accept a clicked day. In-range days close the popover and are returned;
    /// disabled days are ignored and the popover stays open.
    pub fn pick(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        if !self.bounds.contains(date) {
            return None;
        }
        self.popover = PopoverState::Closed;
        Some(date)
    }

    pub fn grid(&self, selected: Option<NaiveDate>) -> Option<MonthGrid> {
        MonthGrid::build(self.visible_month, &self.bounds, selected)
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        Self::new(DateBounds::default())
    }
}
