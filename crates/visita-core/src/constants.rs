/// Hard ceiling on the number of recurrence periods enumerated in a single
/// expansion. Open-ended schedules stop here; bounded schedules are also
/// clamped so the worst case is always `cap * slot count` instants.
pub const OPEN_ENDED_PERIOD_CAP: usize = 100;
