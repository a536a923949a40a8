use std::cell::RefCell;
use std::rc::Rc;

/// Single-entry cache keyed on the identity of an input `Rc`.
pub struct Memo<I, O> {
    last: RefCell<Option<(Rc<I>, Rc<O>)>>,
}

impl<I, O> Memo<I, O> {
    pub const fn new() -> Self {
        Self {
            last: RefCell::new(None),
        }
    }

    /// Recomputes only when `input` is a different allocation than last time.
    pub fn get_or_compute(&self, input: &Rc<I>, compute: impl FnOnce(&I) -> O) -> Rc<O> {
        let mut last = self.last.borrow_mut();
        if let Some((seen, output)) = last.as_ref() {
            if Rc::ptr_eq(seen, input) {
                return Rc::clone(output);
            }
        }
        let output = Rc::new(compute(input));
        *last = Some((Rc::clone(input), Rc::clone(&output)));
        output
    }
}

impl<I, O> Default for Memo<I, O> {
    fn default() -> Self {
        Self::new()
    }
}
