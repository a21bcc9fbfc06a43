#[cfg(test)]
mod tests {
    use glam::Vec2;

    use forgeline_core::enums::{EnemyFaction, EnemyType, ResourceType, TargetBehavior};

    use crate::behavior::{evaluate, EnemyAction, EnemyContext};
    use crate::profiles::get_profile;
    use crate::targeting::*;

    const CORE: Candidate = Candidate {
        building_id: 1,
        class: TargetClass::Core,
        position: Vec2::new(1000.0, 1000.0),
    };
    const TURRET: Candidate = Candidate {
        building_id: 2,
        class: TargetClass::Turret,
        position: Vec2::new(600.0, 1000.0),
    };
    const GENERATOR: Candidate = Candidate {
        building_id: 3,
        class: TargetClass::Generator,
        position: Vec2::new(1000.0, 600.0),
    };
    const WALL: Candidate = Candidate {
        building_id: 4,
        class: TargetClass::Other,
        position: Vec2::new(200.0, 200.0),
    };

    fn ctx<'a>(
        behavior: TargetBehavior,
        position: Vec2,
        player: Option<Vec2>,
        buildings: &'a [Candidate],
    ) -> TargetContext<'a> {
        TargetContext {
            behavior,
            position,
            player,
            buildings,
        }
    }

    fn building_id(target: Option<Target>) -> Option<u32> {
        match target {
            Some(Target::Building { building_id, .. }) => Some(building_id),
            _ => None,
        }
    }

    #[test]
    fn test_profile_table() {
        let swarmer = get_profile(EnemyType::Swarmer);
        assert_eq!(swarmer.hp, 20.0);
        assert_eq!(swarmer.behavior, TargetBehavior::Nearest);
        assert_eq!(swarmer.loot[0].resource, ResourceType::Biomass);

        let lord = get_profile(EnemyType::VoidLord);
        assert_eq!(lord.faction, EnemyFaction::Void);
        assert!(lord.is_boss && lord.can_fly && lord.can_phase);
        assert_eq!(lord.loot.len(), 2);

        assert_eq!(get_profile(EnemyType::Drone).behavior, TargetBehavior::Generators);
        assert_eq!(get_profile(EnemyType::Spitter).behavior, TargetBehavior::Turrets);
    }

    #[test]
    fn test_nearest_picks_closest_of_player_and_buildings() {
        let buildings = [CORE, TURRET, WALL];
        let at = Vec2::new(150.0, 150.0);

        // Wall is closer than the far-away player.
        let t = select_target(&ctx(
            TargetBehavior::Nearest,
            at,
            Some(Vec2::new(2000.0, 2000.0)),
            &buildings,
        ));
        assert_eq!(building_id(t), Some(4));

        // Player next to the enemy wins.
        let t = select_target(&ctx(
            TargetBehavior::Nearest,
            at,
            Some(Vec2::new(160.0, 150.0)),
            &buildings,
        ));
        assert_eq!(t, Some(Target::Player(Vec2::new(160.0, 150.0))));
    }

    /// Dead players (no position) are never targeted.
    #[test]
    fn test_dead_player_ignored() {
        let t = select_target(&ctx(
            TargetBehavior::Nearest,
            Vec2::ZERO,
            None,
            &[CORE],
        ));
        assert_eq!(building_id(t), Some(1));
    }

    #[test]
    fn test_core_behavior_ignores_everything_else() {
        let t = select_target(&ctx(
            TargetBehavior::Core,
            Vec2::new(590.0, 1000.0),
            Some(Vec2::new(590.0, 1000.0)),
            &[TURRET, CORE],
        ));
        assert_eq!(building_id(t), Some(1));
    }

    #[test]
    fn test_turret_and_generator_fall_back_to_core() {
        let with_turret = [CORE, TURRET, GENERATOR];
        let only_core = [CORE, WALL];

        let t = select_target(&ctx(TargetBehavior::Turrets, Vec2::ZERO, None, &with_turret));
        assert_eq!(building_id(t), Some(2));
        let t = select_target(&ctx(TargetBehavior::Turrets, Vec2::ZERO, None, &only_core));
        assert_eq!(building_id(t), Some(1));

        let t = select_target(&ctx(TargetBehavior::Generators, Vec2::ZERO, None, &with_turret));
        assert_eq!(building_id(t), Some(3));
        let t = select_target(&ctx(TargetBehavior::Generators, Vec2::ZERO, None, &only_core));
        assert_eq!(building_id(t), Some(1));
    }

    #[test]
    fn test_smart_priority_chain() {
        let all = [CORE, TURRET, GENERATOR];
        let here = Vec2::new(0.0, 0.0);

        // Player within aggro range.
        let t = select_target(&ctx(TargetBehavior::Smart, here, Some(Vec2::new(100.0, 0.0)), &all));
        assert!(matches!(t, Some(Target::Player(_))));

        // Player too far: turret, then generator, then core.
        let far = Some(Vec2::new(5000.0, 0.0));
        let t = select_target(&ctx(TargetBehavior::Smart, here, far, &all));
        assert_eq!(building_id(t), Some(2));
        let t = select_target(&ctx(TargetBehavior::Smart, here, far, &[CORE, GENERATOR]));
        assert_eq!(building_id(t), Some(3));
        let t = select_target(&ctx(TargetBehavior::Smart, here, far, &[CORE]));
        assert_eq!(building_id(t), Some(1));
    }

    #[test]
    fn test_no_target_without_core() {
        let t = select_target(&ctx(TargetBehavior::Core, Vec2::ZERO, None, &[WALL]));
        assert!(t.is_none());
    }

    #[test]
    fn test_attack_victim_resolution() {
        let buildings = [CORE, WALL];
        // Player standing on the target point takes the hit.
        assert_eq!(
            attack_victim(CORE.position, Some(CORE.position), &buildings),
            Some(AttackVictim::Player)
        );
        // Otherwise the building under the point.
        assert_eq!(
            attack_victim(CORE.position, None, &buildings),
            Some(AttackVictim::Building(1))
        );
        // Nothing within a tile.
        assert_eq!(attack_victim(Vec2::new(500.0, 500.0), None, &buildings), None);
    }

    fn enemy_ctx(position: Vec2, cooldown: f32, target: Option<Vec2>) -> EnemyContext {
        EnemyContext {
            position,
            speed: 100.0,
            attack_range: 20.0,
            attack_cooldown: 1.0,
            current_cooldown: cooldown,
            target,
            dt: 0.1,
        }
    }

    #[test]
    fn test_enemy_moves_toward_target() {
        let update = evaluate(&enemy_ctx(Vec2::ZERO, 0.0, Some(Vec2::new(100.0, 0.0))));
        assert_eq!(update.action, EnemyAction::Move);
        assert!((update.new_position - Vec2::new(10.0, 0.0)).length() < 1e-4);
        assert_eq!(update.new_cooldown, 0.0);
    }

    #[test]
    fn test_enemy_attacks_in_range_then_cools_down() {
        let update = evaluate(&enemy_ctx(Vec2::ZERO, 0.0, Some(Vec2::new(15.0, 0.0))));
        assert_eq!(update.action, EnemyAction::Attack);
        assert_eq!(update.new_position, Vec2::ZERO);
        assert_eq!(update.new_cooldown, 1.0);
    }

    /// Stunned or cooling down: hold position even with a target.
    #[test]
    fn test_enemy_holds_while_on_cooldown() {
        let update = evaluate(&enemy_ctx(Vec2::ZERO, 0.5, Some(Vec2::new(100.0, 0.0))));
        assert_eq!(update.action, EnemyAction::Hold);
        assert_eq!(update.new_position, Vec2::ZERO);
        assert!((update.new_cooldown - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_enemy_idle_without_target() {
        let update = evaluate(&enemy_ctx(Vec2::new(5.0, 5.0), 0.0, None));
        assert_eq!(update.action, EnemyAction::Idle);
        assert_eq!(update.new_position, Vec2::new(5.0, 5.0));
    }
}
