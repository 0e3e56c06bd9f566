//! Register definitions for the MPU-6050
//!
//! Only the registers the driver touches are declared. Sensor outputs are
//! big-endian words, high byte at the lower address, so the accelerometer
//! and gyroscope blocks are declared as single 48-bit registers read in one
//! transaction. Bit 0 is the least significant bit of the last byte, which
//! puts the X word at bits 32..48 and the Z word at bits 0..16.

device_driver::create_device!(
    device_name: Mpu6050Registers,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        // ==================== CONFIGURATION ====================

        /// SMPLRT_DIV - Sample Rate Divider (0x19)
        /// Sample rate = gyroscope output rate / (1 + divider)
        register SmplrtDiv {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;

            smplrt_div: uint = 0..8,
        },

        /// CONFIG - FSYNC and Digital Low Pass Filter (0x1A)
        register Config {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            /// Digital low pass filter setting (0-6)
            dlpf_cfg: uint = 0..3,
            /// FSYNC pin sampling
            ext_sync_set: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG - Gyroscope Configuration (0x1B)
        register GyroConfig {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Full-scale range: 0=±250, 1=±500, 2=±1000, 3=±2000 °/s
            fs_sel: uint = 3..5,
            /// Z-axis self-test
            zg_st: bool = 5,
            /// Y-axis self-test
            yg_st: bool = 6,
            /// X-axis self-test
            xg_st: bool = 7,
        },

        /// ACCEL_CONFIG - Accelerometer Configuration (0x1C)
        register AccelConfig {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Full-scale range: 0=±2g, 1=±4g, 2=±8g, 3=±16g
            afs_sel: uint = 3..5,
            /// Z-axis self-test
            za_st: bool = 5,
            /// Y-axis self-test
            ya_st: bool = 6,
            /// X-axis self-test
            xa_st: bool = 7,
        },

        // ==================== SENSOR DATA ====================

        /// ACCEL_XOUT_H..ACCEL_ZOUT_L - Accelerometer Output (0x3B-0x40)
        register AccelOut {
            type Access = RO;
            const ADDRESS = 0x3B;
            const SIZE_BITS = 48;

            accel_x: int = 32..48,
            accel_y: int = 16..32,
            accel_z: int = 0..16,
        },

        /// TEMP_OUT_H..TEMP_OUT_L - Temperature Output (0x41-0x42)
        register TempOut {
            type Access = RO;
            const ADDRESS = 0x41;
            const SIZE_BITS = 16;

            temp_out: int = 0..16,
        },

        /// GYRO_XOUT_H..GYRO_ZOUT_L - Gyroscope Output (0x43-0x48)
        register GyroOut {
            type Access = RO;
            const ADDRESS = 0x43;
            const SIZE_BITS = 48;

            gyro_x: int = 32..48,
            gyro_y: int = 16..32,
            gyro_z: int = 0..16,
        },

        // ==================== POWER AND IDENTITY ====================

        /// PWR_MGMT_1 - Power Management 1 (0x6B)
        /// Power-on value: 0x40 (sleeping, internal oscillator)
        register PwrMgmt1 {
            const ADDRESS = 0x6B;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x40;

            /// Clock source select
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            reserved_4: uint = 4..5,
            /// Cycle between sleep and single samples
            cycle: bool = 5,
            /// Sleep mode
            sleep: bool = 6,
            /// Reset all registers, self-clearing
            device_reset: bool = 7,
        },

        /// WHO_AM_I - Device ID Register (0x75)
        /// Expected value: 0x68
        register WhoAmI {
            type Access = RO;
            const ADDRESS = 0x75;
            const SIZE_BITS = 8;

            /// Upper six bits of the I2C address
            who_am_i: uint = 0..8,
        },
    }
);
