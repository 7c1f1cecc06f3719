// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

/// Single-slot notification used by controllers to reach the view.
///
/// Registering a handler replaces the previous one. While a handler runs it is taken out
/// of the slot, so it may call back into its controller without a `RefCell` panic.
pub struct Callback<Arguments: ?Sized> {
    handler: Cell<Option<Box<dyn FnMut(&Arguments)>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, handler: impl FnMut(&Arguments) + 'static) {
        self.handler.set(Some(Box::new(handler)));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        let Some(mut handler) = self.handler.take() else {
            return;
        };

        handler(arguments);

        // keep a handler that was registered while this one was running
        let registered = self.handler.take();
        self.handler.set(Some(registered.unwrap_or(handler)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_invoke() {
        let received = Rc::new(Cell::new(0));
        let callback: Callback<(i32, i32)> = Callback::default();

        callback.on({
            let received = received.clone();
            move |(a, b)| received.set(a + b)
        });
        callback.invoke(&(3, 2));

        assert_eq!(received.get(), 5);
    }

    #[test]
    fn test_invoke_without_handler() {
        let callback: Callback<str> = Callback::default();
        callback.invoke("nothing happens");
    }

    #[test]
    fn test_on_replaces_handler() {
        let received = Rc::new(Cell::new(""));
        let callback: Callback<()> = Callback::default();

        callback.on({
            let received = received.clone();
            move |()| received.set("first")
        });
        callback.on({
            let received = received.clone();
            move |()| received.set("second")
        });
        callback.invoke(&());

        assert_eq!(received.get(), "second");
    }

    #[test]
    fn test_register_while_invoking() {
        let received = Rc::new(Cell::new(0));
        let callback: Rc<Callback<i32>> = Rc::new(Callback::default());

        callback.on({
            let callback = Rc::downgrade(&callback);
            let received = received.clone();

            move |value| {
                received.set(*value);

                let received = received.clone();
                callback.upgrade().unwrap().on(move |value| received.set(value * 10));
            }
        });

        callback.invoke(&1);
        callback.invoke(&2);

        assert_eq!(received.get(), 20);
    }
}
