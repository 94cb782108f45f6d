/// Dispatch gate shared by every control on a page.
///
/// Two independent conditions keep the controls disabled: a request in flight
/// (`busy`) and a pending cooldown. Controls are enabled only when both have
/// cleared. At most one cooldown is pending; arming a new one supersedes the
/// previous ticket, which then expires as a no-op.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlGate {
    busy: bool,
    pending_cooldown: Option<u64>,
    generation: u64,
}

/// Proof that the caller owns the single in-flight slot.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a permit must be handed back through ControlGate::release"]
pub struct DispatchPermit {
    _private: (),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownTicket(u64);

impl ControlGate {
    pub fn try_acquire(&mut self) -> Option<DispatchPermit> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(DispatchPermit { _private: () })
    }

    pub fn release(&mut self, permit: DispatchPermit) {
        let DispatchPermit { .. } = permit;
        self.busy = false;
    }

    pub fn arm_cooldown(&mut self) -> CooldownTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending_cooldown = Some(self.generation);
        CooldownTicket(self.generation)
    }

    /// Returns `true` when the ticket was still current and the cooldown has
    /// now cleared.
    pub fn expire(&mut self, ticket: CooldownTicket) -> bool {
        if self.pending_cooldown == Some(ticket.0) {
            self.pending_cooldown = None;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn cooldown_pending(&self) -> bool {
        self.pending_cooldown.is_some()
    }

    pub fn controls_enabled(&self) -> bool {
        !self.busy && self.pending_cooldown.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_while_busy_is_refused() {
        let mut gate = ControlGate::default();
        let permit = gate.try_acquire().expect("idle gate grants a permit");
        assert!(gate.try_acquire().is_none());
        assert!(gate.try_acquire().is_none());
        assert!(!gate.controls_enabled());
        gate.release(permit);
        assert!(gate.try_acquire().is_some());
    }

    #[test]
    fn rapid_clicks_send_at_most_one_request() {
        let mut gate = ControlGate::default();
        let mut sent = 0;
        let mut held = None;
        for _ in 0..25 {
            if let Some(permit) = gate.try_acquire() {
                sent += 1;
                held = Some(permit);
            }
        }
        assert_eq!(sent, 1);
        if let Some(permit) = held {
            gate.release(permit);
        }
    }

    #[test]
    fn controls_stay_disabled_until_both_gates_clear() {
        let mut gate = ControlGate::default();
        assert!(gate.controls_enabled());

        let permit = gate.try_acquire().unwrap();
        let ticket = gate.arm_cooldown();
        gate.release(permit);
        assert!(!gate.is_busy());
        assert!(gate.cooldown_pending());
        assert!(!gate.controls_enabled());

        assert!(gate.expire(ticket));
        assert!(gate.controls_enabled());
    }

    #[test]
    fn cooldown_expiry_while_busy_keeps_controls_disabled() {
        let mut gate = ControlGate::default();
        let ticket = gate.arm_cooldown();
        let permit = gate.try_acquire().unwrap();
        assert!(gate.expire(ticket));
        assert!(!gate.controls_enabled());
        gate.release(permit);
        assert!(gate.controls_enabled());
    }

    #[test]
    fn rearming_supersedes_the_previous_cooldown() {
        let mut gate = ControlGate::default();
        let first = gate.arm_cooldown();
        let second = gate.arm_cooldown();

        assert!(!gate.expire(first));
        assert!(gate.cooldown_pending());
        assert!(gate.expire(second));
        assert!(!gate.cooldown_pending());
        assert!(!gate.expire(second));
    }
}
